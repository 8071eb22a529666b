//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: PostId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Store-level errors, shared by every `PostStore` binding.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Backend unreachable: {0}")]
    Connection(String),

    #[error("Backend returned {status}: {detail}")]
    Backend { status: u16, detail: String },

    #[error("Malformed post data: {0}")]
    Serialization(String),

    #[error("Post not found")]
    NotFound,

    #[error("Storage failed: {0}")]
    Storage(String),
}

/// Key-value storage errors.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Storage I/O failed: {0}")]
    Io(String),
}

impl From<KvError> for StoreError {
    fn from(err: KvError) -> Self {
        StoreError::Storage(err.to_string())
    }
}
