//! Structured logging via `tracing`
//!
//! `RUST_LOG` takes precedence over the configured level so operators can
//! raise verbosity without editing the config file.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Build the filter from `RUST_LOG`, falling back to `default_level`
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber
///
/// Returns an error message if a subscriber is already installed.
pub fn init_logging(default_level: &str, format: LogFormat) -> Result<(), String> {
    let filter = env_filter(default_level);

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
    };

    result.map_err(|e| format!("Failed to initialize logging: {}", e))
}
