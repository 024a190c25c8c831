use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid parent: {0}")]
    InvalidParent(String),

    #[error("Already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ContentError {
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        ContentError::NotFound(format!("{} {}", kind, id))
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
