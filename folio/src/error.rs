use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Content error: {0}")]
    Content(#[from] folio_api::ContentError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
