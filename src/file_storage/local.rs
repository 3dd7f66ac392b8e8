//! # Local Filesystem Backend

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::backend::StorageBackend;
use super::errors::{StorageError, StorageResult};
use super::filename::validate_filename;

/// Local filesystem storage backend
///
/// Files live directly under `root`; there are no subdirectories.
#[derive(Debug)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    /// Create a new local backend without touching the filesystem
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a local backend, creating `root` if it does not exist
    pub fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self::new(root))
    }

    fn full_path(&self, name: &str) -> StorageResult<PathBuf> {
        validate_filename(name)?;
        Ok(self.root.join(name))
    }
}

impl StorageBackend for LocalBackend {
    fn write(&self, name: &str, data: &[u8]) -> StorageResult<()> {
        let full_path = self.full_path(name)?;
        fs::write(&full_path, data)?;
        Ok(())
    }

    fn read(&self, name: &str) -> StorageResult<Vec<u8>> {
        let full_path = self.full_path(name)?;

        if !full_path.is_file() {
            return Err(StorageError::ObjectNotFound(name.to_string()));
        }

        fs::read(&full_path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::ObjectNotFound(name.to_string())
            } else {
                StorageError::IoError(e.to_string())
            }
        })
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            // Only list what `read` will serve.
            match entry.file_name().to_str() {
                Some(name) if validate_filename(name).is_ok() => names.push(name.to_string()),
                _ => {}
            }
        }
        names.sort();

        Ok(names)
    }
}
