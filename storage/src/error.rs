//! Storage error types.
//!
//! Returned by every [`HistoryStore`](crate::HistoryStore) backend; callers treat any of them
//! as a failure of that single load or append.

use thiserror::Error;

/// Errors that can occur when loading or appending history.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Remote store error: {0}")]
    Remote(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for StorageError {
    fn from(e: reqwest::Error) -> Self {
        StorageError::Remote(e.to_string())
    }
}
