//! HTTP Server Configuration
//!
//! Bind address, CORS, storage location and response behavior.

use std::path::PathBuf;

use axum::http::{HeaderValue, Uri};
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (empty = any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory uploaded files are stored in (default: "uploads")
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Largest accepted request body in bytes (default: 100MB)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Start with the seed catalog of books (default: true)
    #[serde(default = "default_true")]
    pub seed_books: bool,

    /// Answer 404 instead of `[]` when listing an empty collection (default: true)
    #[serde(default = "default_true")]
    pub empty_collections_not_found: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_upload_bytes() -> usize {
    100 * 1024 * 1024
}

fn default_true() -> bool {
    true
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            upload_dir: default_upload_dir(),
            max_upload_bytes: default_max_upload_bytes(),
            seed_books: true,
            empty_collections_not_found: true,
        }
    }
}

impl HttpServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configured CORS origins that are not of the form `scheme://host[:port]`
    pub fn invalid_cors_origins(&self) -> Vec<&str> {
        self.cors_origins
            .iter()
            .map(String::as_str)
            .filter(|origin| !is_valid_origin(origin))
            .collect()
    }
}

/// An origin is an http(s) URL with a host and nothing after it
pub fn is_valid_origin(origin: &str) -> bool {
    if HeaderValue::from_str(origin).is_err() {
        return false;
    }

    let Ok(uri) = origin.parse::<Uri>() else {
        return false;
    };

    matches!(uri.scheme_str(), Some("http") | Some("https"))
        && uri.authority().is_some_and(|a| !a.host().is_empty())
        && uri.path() == "/"
        && uri.query().is_none()
        && !origin.ends_with('/')
}
