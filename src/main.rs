//! bookshelf CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, and exits non-zero with
//! the error on stderr when a command fails.

use bookshelf::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
