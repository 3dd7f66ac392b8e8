//! # HTTP API Errors
//!
//! Every failure leaves the server as a JSON body carrying the detail
//! message, the numeric status, and an optional machine-readable error code.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::books::{BookError, BookId};
use crate::file_storage::StorageError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Machine-readable error codes
pub mod codes {
    pub const BOOK_NOT_FOUND: &str = "BOOK_NOT_FOUND";
    pub const BOOKS_NOT_FOUND: &str = "BOOKS_NOT_FOUND";
    pub const ID_MISMATCH: &str = "ID_MISMATCH";
    pub const FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";
    pub const FILES_NOT_FOUND: &str = "FILES_NOT_FOUND";
    pub const INVALID_FILENAME: &str = "INVALID_FILENAME";
    pub const MISSING_FILE: &str = "MISSING_FILE";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
}

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body or path failed to decode
    #[error("{detail}")]
    Validation { status: StatusCode, detail: String },

    #[error("ID in path and body must match")]
    IdMismatch,

    #[error("Book with ID {0} not found")]
    BookNotFound(BookId),

    #[error("No books found")]
    NoBooks,

    #[error("File '{0}' not found")]
    FileNotFound(String),

    #[error("No files found")]
    NoFiles,

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("No file provided in the 'file' form field")]
    MissingFile,

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Failed to upload file: {0}")]
    UploadFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { status, .. } => *status,
            ApiError::IdMismatch => StatusCode::BAD_REQUEST,
            ApiError::InvalidFilename(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingFile => StatusCode::BAD_REQUEST,

            ApiError::BookNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NoBooks => StatusCode::NOT_FOUND,
            ApiError::FileNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NoFiles => StatusCode::NOT_FOUND,

            ApiError::UploadFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable code, if this error has one
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            ApiError::Validation { .. } => Some(codes::VALIDATION_ERROR),
            ApiError::IdMismatch => Some(codes::ID_MISMATCH),
            ApiError::BookNotFound(_) => Some(codes::BOOK_NOT_FOUND),
            ApiError::NoBooks => Some(codes::BOOKS_NOT_FOUND),
            ApiError::FileNotFound(_) => Some(codes::FILE_NOT_FOUND),
            ApiError::NoFiles => Some(codes::FILES_NOT_FOUND),
            ApiError::InvalidFilename(_) => Some(codes::INVALID_FILENAME),
            ApiError::MissingFile => Some(codes::MISSING_FILE),
            ApiError::UploadFailed(_) | ApiError::Internal(_) => None,
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(id) => ApiError::BookNotFound(id),
            BookError::LockPoisoned => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ObjectNotFound(name) => ApiError::FileNotFound(name),
            StorageError::InvalidFilename(reason) => ApiError::InvalidFilename(reason),
            StorageError::IoError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Validation {
            status: err.status(),
            detail: err.body_text(),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            error_code: err.error_code().map(str::to_string),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
