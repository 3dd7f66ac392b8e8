//! # HTTP Server Module
//!
//! Axum server exposing the book and file endpoints.
//!
//! # Endpoints
//!
//! - `/` and `/health` - Welcome message and health check
//! - `/books`, `/books/:id` - Book CRUD
//! - `/upload`, `/files`, `/files/:filename` - File upload and download

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod file_routes;
pub mod root_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
