use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8090,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// postgres:// mysql:// 或 sqlite:// 连接串
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// 启动时执行迁移
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://folio.db?mode=rwc".to_string(),
            max_connections: 10,
            min_connections: 1,
            run_migrations: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// EnvFilter语法，RUST_LOG优先
    pub level: String,
    /// 输出JSON格式日志
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // 如果存在.env文件，先把其中的变量加载到环境中
        dotenv::dotenv().ok();

        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let config_path = home_dir.join(".folio").join("folio.toml");

        let config = config::Config::builder()
            .add_source(config::File::with_name("folio.toml").required(false))
            .add_source(config::File::from(config_path.as_path()).required(false))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;
        config.try_deserialize()
    }
}
