//! Error types for the collection providers.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
///
/// Every variant is recoverable at the presentation layer; the store
/// itself never retries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier does not resolve to a record.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The backing provider could not be reached or answered with a
    /// non-success status.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Shorthand for a [`StoreError::NotFound`].
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
