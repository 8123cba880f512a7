//! Store error types.

use thiserror::Error;

/// Errors that can occur while reading or writing results.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The SQLite database rejected a statement.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A record could not be encoded or decoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored timestamp is not valid RFC 3339.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The store's lock was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    Lock(String),
}
