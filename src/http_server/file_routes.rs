//! File HTTP Routes
//!
//! Upload, list and download of whole files.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        multipart::MultipartRejection, rejection::PathRejection, Multipart, Path, State,
    },
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::file_storage::{validate_filename, StorageBackend, StorageError};

use super::errors::{ApiError, ApiResult};

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

// ==================
// Shared State
// ==================

/// File state shared across handlers
pub struct FileState {
    pub backend: Arc<dyn StorageBackend>,
    /// Answer 404 instead of `[]` for an empty directory
    pub empty_as_not_found: bool,
}

impl FileState {
    pub fn new(backend: Arc<dyn StorageBackend>, empty_as_not_found: bool) -> Self {
        Self {
            backend,
            empty_as_not_found,
        }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// File Routes
// ==================

/// Create file routes
pub fn file_routes(state: Arc<FileState>) -> Router {
    Router::new()
        .route("/upload", post(upload_file_handler))
        .route("/files", get(list_files_handler))
        .route("/files/:filename", get(download_file_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn upload_file_handler(
    State(state): State<Arc<FileState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or(ApiError::MissingFile)?;

        if let Err(e) = validate_filename(&file_name) {
            tracing::warn!(file_name = %file_name, error = %e, "rejected upload");
            return Err(e.into());
        }

        let data = field.bytes().await?;

        state
            .backend
            .write(&file_name, &data)
            .map_err(|e| match e {
                StorageError::IoError(msg) => ApiError::UploadFailed(msg),
                other => other.into(),
            })?;
        tracing::info!(file_name = %file_name, size = data.len(), "file uploaded");

        return Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                message: format!("File '{}' uploaded successfully.", file_name),
            }),
        ));
    }

    Err(ApiError::MissingFile)
}

async fn list_files_handler(State(state): State<Arc<FileState>>) -> ApiResult<Json<Vec<String>>> {
    let files = state.backend.list()?;

    if files.is_empty() && state.empty_as_not_found {
        return Err(ApiError::NoFiles);
    }

    Ok(Json(files))
}

async fn download_file_handler(
    State(state): State<Arc<FileState>>,
    filename: Result<Path<String>, PathRejection>,
) -> ApiResult<(StatusCode, HeaderMap, Bytes)> {
    let Path(filename) = filename?;

    let data = state.backend.read(&filename)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );
    let quoted = filename.replace('"', "\\\"");
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", quoted))
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    headers.insert(header::CONTENT_DISPOSITION, disposition);

    Ok((StatusCode::OK, headers, Bytes::from(data)))
}
