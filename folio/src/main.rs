mod config;
mod error;
mod server;

use axum::serve;
use config::{Config, LogConfig};
use error::{FolioError, Result};
use folio_infra::DatabaseManager;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志，RUST_LOG优先于配置文件中的级别
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;
    init_tracing(&config.log);
    info!("Starting Folio application...");

    // 初始化数据库连接
    let db_manager = DatabaseManager::connect(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    if config.database.run_migrations {
        db_manager.migrate().await?;
    }

    // 初始化内容类型和应用状态
    let registry = server::init_registry()?;
    let app_state = server::init_app_state(&db_manager, registry);
    info!("Application state initialized");

    // 创建路由
    let app = server::create_router(app_state);

    // 启动HTTP服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| FolioError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;
    info!("Server listening on {}", addr);

    serve(listener, app.into_make_service()).await?;

    Ok(())
}
