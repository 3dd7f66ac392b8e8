//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{init_logging, LogFormat};

use super::args::{Command, DEFAULT_CONFIG_PATH};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// Log filter directive (default "info"); `RUST_LOG` wins when set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Load the file at `path` if given, else the default path if it exists,
    /// else built-in defaults
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::Config("port must be > 0".into()));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::Config("host must not be empty".into()));
        }

        if self.server.upload_dir.as_os_str().is_empty() {
            return Err(CliError::Config("upload_dir must not be empty".into()));
        }

        if self.server.max_upload_bytes == 0 {
            return Err(CliError::Config("max_upload_bytes must be > 0".into()));
        }

        let invalid = self.server.invalid_cors_origins();
        if !invalid.is_empty() {
            return Err(CliError::Config(format!(
                "invalid cors_origins: {}",
                invalid.join(", ")
            )));
        }

        Ok(())
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl ServeOverrides {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, host, port } => {
            serve(config.as_deref(), ServeOverrides { host, port })
        }
    }
}

/// Write a default config file and create the upload directory
///
/// Refuses to overwrite an existing config file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(config_path.to_path_buf()));
    }

    let config = Config::default();

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(config_path, serde_json::to_string_pretty(&config)?)?;

    let upload_dir = upload_dir_for(config_path, &config.server.upload_dir);
    fs::create_dir_all(&upload_dir)?;

    println!("Wrote {}", config_path.display());
    println!("Upload directory: {}", upload_dir.display());

    Ok(())
}

/// Relative upload directories are placed next to the config file
fn upload_dir_for(config_path: &Path, upload_dir: &Path) -> PathBuf {
    if upload_dir.is_absolute() {
        return upload_dir.to_path_buf();
    }
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(upload_dir),
        _ => upload_dir.to_path_buf(),
    }
}

/// Load config, start logging and run the HTTP server until Ctrl-C
pub fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> CliResult<()> {
    let mut config = Config::resolve(config_path)?;
    overrides.apply(&mut config);
    config.validate()?;

    if let Some(path) = config_path {
        config.server.upload_dir = upload_dir_for(path, &config.server.upload_dir);
    }

    init_logging(&config.log_level, LogFormat::from_json_flag(config.log_json))
        .map_err(CliError::BootFailed)?;

    let server = HttpServer::with_config(config.server)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::BootFailed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::BootFailed(format!("HTTP server failed: {}", e)))
    })
}
