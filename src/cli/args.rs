//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf init [--config <path>]
//! - bookshelf serve [--config <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Path used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./bookshelf.json";

/// Bookshelf - books and file uploads over HTTP
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file and create the upload directory
    Init {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply if omitted and absent)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured bind port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
