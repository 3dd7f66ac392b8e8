//! # Storage Backend Trait

use super::errors::StorageResult;

/// Backend trait for file storage
///
/// Names are bare filenames, never paths. Implementations must reject
/// anything [`super::validate_filename`] rejects.
pub trait StorageBackend: Send + Sync + std::fmt::Debug {
    /// Write data under `name`, replacing any existing file
    fn write(&self, name: &str, data: &[u8]) -> StorageResult<()>;

    /// Read the whole file stored under `name`
    fn read(&self, name: &str) -> StorageResult<Vec<u8>>;

    /// Names of all stored files, sorted
    fn list(&self) -> StorageResult<Vec<String>>;
}
