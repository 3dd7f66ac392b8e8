//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use bookshelf::books::{seed_catalog, InMemoryBookRepository};
use bookshelf::file_storage::{LocalBackend, StorageBackend, StorageError, StorageResult};
use bookshelf::http_server::{ErrorResponse, HttpServer, HttpServerConfig};
use serde::de::DeserializeOwned;
use tempfile::TempDir;
use tower::ServiceExt;

pub const BOUNDARY: &str = "bookshelf-test-boundary";

/// A router over a fresh upload directory
pub struct TestApp {
    pub router: Router,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn seeded() -> Self {
        Self::build(true, HttpServerConfig::default())
    }

    pub fn empty() -> Self {
        Self::build(false, HttpServerConfig::default())
    }

    pub fn with_config(seeded: bool, config: HttpServerConfig) -> Self {
        Self::build(seeded, config)
    }

    /// A seeded router whose file endpoints go through `backend`
    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        let upload_dir = TempDir::new().expect("Failed to create temp dir");
        let repository = InMemoryBookRepository::with_books(seed_catalog());
        let router =
            HttpServer::from_parts(HttpServerConfig::default(), Arc::new(repository), backend)
                .router();

        Self { router, upload_dir }
    }

    fn build(seeded: bool, config: HttpServerConfig) -> Self {
        let upload_dir = TempDir::new().expect("Failed to create temp dir");
        let repository = if seeded {
            InMemoryBookRepository::with_books(seed_catalog())
        } else {
            InMemoryBookRepository::new()
        };
        let backend = LocalBackend::new(upload_dir.path().to_path_buf());

        let router = HttpServer::from_parts(config, Arc::new(repository), Arc::new(backend))
            .router();

        Self { router, upload_dir }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: serde_json::Value) -> Response<Body> {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn upload(&self, field: &str, filename: &str, data: &[u8]) -> Response<Body> {
        self.send(
            Request::post("/upload")
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(multipart_body(field, filename, data)))
                .unwrap(),
        )
        .await
    }
}

/// Backend whose writes always fail, as on a full disk
#[derive(Debug, Default)]
pub struct FullDiskBackend;

impl StorageBackend for FullDiskBackend {
    fn write(&self, _name: &str, _data: &[u8]) -> StorageResult<()> {
        Err(StorageError::IoError("No space left on device".to_string()))
    }

    fn read(&self, name: &str) -> StorageResult<Vec<u8>> {
        Err(StorageError::ObjectNotFound(name.to_string()))
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Percent-encode a filename for use as a path segment
pub fn encode_segment(name: &str) -> String {
    name.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

/// A single-part multipart/form-data body
pub fn multipart_body(field: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}

pub async fn body_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("Body is not the expected JSON")
}

/// Assert the status and return the structured error body
pub async fn expect_error(response: Response<Body>, status: StatusCode) -> ErrorResponse {
    assert_eq!(response.status(), status);
    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.code, status.as_u16());
    error
}
