//! # File Storage Errors

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// File storage errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("File '{0}' not found")]
    ObjectNotFound(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::IoError(e.to_string())
    }
}
