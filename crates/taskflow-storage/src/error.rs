//! Error types for taskflow storage operations.

use thiserror::Error;

/// Errors that can occur while reading or writing the key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Key contains characters that cannot be mapped to a file name.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Failed to serialize a value to JSON.
    #[error("Failed to serialize value for {key}: {source}")]
    Serialize {
        /// Key being written.
        key: String,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to acquire the in-memory store lock.
    #[error("Store lock error")]
    LockError,

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Atomic replace of a value file failed.
    #[error("Failed to persist value file: {0}")]
    PersistError(#[from] tempfile::PersistError),
}

/// Result alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
