//! Root HTTP Routes
//!
//! Welcome message and health check.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Welcome response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create root routes
pub fn root_routes() -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
}

async fn welcome_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Bookshelf API".to_string(),
    })
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
