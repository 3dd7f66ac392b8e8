//! # Observability
//!
//! Process-wide logging setup.

pub mod logger;

pub use logger::{init_logging, LogFormat};
