//! Error types and result handling for store operations.

use thiserror::Error;

/// Result type alias using `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by document store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store is configured but cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Underlying database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Record could not be serialized into a document.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable(err.to_string())
            },
            _ => Self::Database(err.to_string()),
        }
    }
}
