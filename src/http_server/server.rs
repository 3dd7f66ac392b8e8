//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::books::{seed_catalog, BookRepository, InMemoryBookRepository};
use crate::file_storage::{LocalBackend, StorageBackend, StorageResult};

use super::book_routes::{book_routes, BookState};
use super::config::{is_valid_origin, HttpServerConfig};
use super::file_routes::{file_routes, FileState};
use super::root_routes::root_routes;

/// HTTP Server for the bookshelf API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with an in-memory book store and a local upload
    /// directory, creating the directory if needed
    pub fn with_config(config: HttpServerConfig) -> StorageResult<Self> {
        let repository = if config.seed_books {
            InMemoryBookRepository::with_books(seed_catalog())
        } else {
            InMemoryBookRepository::new()
        };
        let backend = LocalBackend::open(&config.upload_dir)?;

        Ok(Self::from_parts(
            config,
            Arc::new(repository),
            Arc::new(backend),
        ))
    }

    /// Create a server around an existing book store and file backend
    pub fn from_parts(
        config: HttpServerConfig,
        repository: Arc<dyn BookRepository>,
        backend: Arc<dyn StorageBackend>,
    ) -> Self {
        let router = Self::build_router(&config, repository, backend);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        repository: Arc<dyn BookRepository>,
        backend: Arc<dyn StorageBackend>,
    ) -> Router {
        let book_state = Arc::new(BookState::new(
            repository,
            config.empty_collections_not_found,
        ));
        let file_state = Arc::new(FileState::new(
            backend,
            config.empty_collections_not_found,
        ));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            for origin in config.invalid_cors_origins() {
                tracing::warn!(origin, "ignoring invalid CORS origin");
            }
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter(|s| is_valid_origin(s))
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(root_routes())
            .merge(book_routes(book_state))
            .merge(file_routes(file_state))
            .layer(DefaultBodyLimit::max(config.max_upload_bytes))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C, then let in-flight requests finish
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(
            %addr,
            upload_dir = %self.config.upload_dir.display(),
            "bookshelf listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("bookshelf stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
