//! Domain error types.

use thiserror::Error;

/// Failures of the underlying key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store operation failed: {0}")]
    Operation(String),

    #[error("stored value could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by link lifecycle operations.
///
/// The HTTP layer maps these to status codes in [`crate::error::AppError`].
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("short code '{0}' is already taken")]
    CodeTaken(String),

    #[error("short link '{0}' not found")]
    NotFound(String),

    #[error("short link '{0}' has expired")]
    Gone(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LinkError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
