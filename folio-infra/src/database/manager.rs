use folio_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Arc;
use std::time::Duration;

/// DatabaseManager 管理主数据库连接
#[derive(Clone)]
pub struct DatabaseManager {
    primary: Arc<DatabaseConnection>,
}

impl DatabaseManager {
    /// 按URL建立连接池，支持 postgres / mysql / sqlite
    pub async fn connect(url: &str, max_connections: u32, min_connections: u32) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(url.to_owned());
        options
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        tracing::info!("Connected to database");
        Ok(Self {
            primary: Arc::new(db),
        })
    }

    /// 内存SQLite，只能使用单个连接，否则每个连接看到的是不同的库
    pub async fn in_memory() -> Result<Self, DbErr> {
        Self::connect("sqlite::memory:", 1, 1).await
    }

    /// 执行所有未应用的迁移
    pub async fn migrate(&self) -> Result<(), DbErr> {
        Migrator::up(self.primary.as_ref(), None).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// 获取主数据库连接
    pub fn primary_db(&self) -> Arc<DatabaseConnection> {
        self.primary.clone()
    }
}
