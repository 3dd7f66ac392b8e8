//! Filename validation for uploads and downloads.

use std::sync::OnceLock;

use regex::Regex;

use super::errors::{StorageError, StorageResult};

/// Longest filename accepted (common filesystem limit)
pub const MAX_FILENAME_LEN: usize = 255;

static ALLOWED: OnceLock<Regex> = OnceLock::new();

fn allowed() -> &'static Regex {
    // Anything but path separators and control characters.
    ALLOWED.get_or_init(|| {
        Regex::new(r"^[^/\\\x00-\x1F\x7F]+$").expect("filename pattern is valid")
    })
}

/// Check that `name` is safe to use as a single path component
pub fn validate_filename(name: &str) -> StorageResult<()> {
    if name.is_empty() {
        return Err(StorageError::InvalidFilename("filename is empty".to_string()));
    }

    if name.len() > MAX_FILENAME_LEN {
        return Err(StorageError::InvalidFilename(format!(
            "filename exceeds {} bytes",
            MAX_FILENAME_LEN
        )));
    }

    if name == "." || name == ".." {
        return Err(StorageError::InvalidFilename(name.to_string()));
    }

    if !allowed().is_match(name) {
        return Err(StorageError::InvalidFilename(name.to_string()));
    }

    Ok(())
}
