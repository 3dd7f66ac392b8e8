//! CLI module for bookshelf
//!
//! Provides command-line interface for:
//! - init: Write a default config file and create the upload directory
//! - serve: Load config and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, DEFAULT_CONFIG_PATH};
pub use commands::{init, run, run_command, serve, Config, ServeOverrides};
pub use errors::{CliError, CliResult};
