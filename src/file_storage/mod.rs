//! # File Storage Module
//!
//! Whole-file storage keyed by filename. Every name is validated before it
//! reaches the filesystem.

pub mod backend;
pub mod errors;
pub mod filename;
pub mod local;

pub use backend::StorageBackend;
pub use errors::{StorageError, StorageResult};
pub use filename::validate_filename;
pub use local::LocalBackend;
