//! # CLI Errors
//!
//! Every CLI error is fatal. `main` prints the stable code followed by the
//! message and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

use crate::file_storage::StorageError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file {} already exists", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("Storage setup failed: {0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    BootFailed(String),
}

impl CliError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "BOOKSHELF_CLI_CONFIG_ERROR",
            CliError::Io(_) | CliError::Json(_) => "BOOKSHELF_CLI_IO_ERROR",
            CliError::AlreadyInitialized(_) => "BOOKSHELF_CLI_ALREADY_INITIALIZED",
            CliError::Storage(_) | CliError::BootFailed(_) => "BOOKSHELF_CLI_BOOT_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            CliError::Config("port must be > 0".into()).code(),
            "BOOKSHELF_CLI_CONFIG_ERROR"
        );
        assert_eq!(
            CliError::AlreadyInitialized(PathBuf::from("bookshelf.json")).code(),
            "BOOKSHELF_CLI_ALREADY_INITIALIZED"
        );
        assert_eq!(CliError::BootFailed("x".into()).code(), "BOOKSHELF_CLI_BOOT_FAILED");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CliError::from(io);
        assert_eq!(err.code(), "BOOKSHELF_CLI_IO_ERROR");
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_storage_error_is_boot_failure() {
        let err = CliError::from(StorageError::IoError("permission denied".into()));
        assert_eq!(err.code(), "BOOKSHELF_CLI_BOOT_FAILED");
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_already_initialized_message() {
        let err = CliError::AlreadyInitialized(PathBuf::from("/etc/bookshelf.json"));
        assert_eq!(err.to_string(), "Config file /etc/bookshelf.json already exists");
    }
}
