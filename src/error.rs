// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifLogError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database Error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Malformed event: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Event listener stopped unexpectedly")]
    ListenerPanicked,
}

pub type Result<T> = std::result::Result<T, NotifLogError>;
