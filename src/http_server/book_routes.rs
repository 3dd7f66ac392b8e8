//! Book HTTP Routes
//!
//! CRUD endpoints over the book repository.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::books::{
    Book, BookId, BookRepository, CreateBookRequest, DeleteBookResponse, UpdateBookRequest,
};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BookState {
    pub repository: Arc<dyn BookRepository>,
    /// Answer 404 instead of `[]` for an empty store
    pub empty_as_not_found: bool,
}

impl BookState {
    pub fn new(repository: Arc<dyn BookRepository>, empty_as_not_found: bool) -> Self {
        Self {
            repository,
            empty_as_not_found,
        }
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_book_handler(
    State(state): State<Arc<BookState>>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let Json(request) = payload?;

    let book = state.repository.create(request)?;
    tracing::info!(id = book.id, title = %book.title, "book created");

    Ok((StatusCode::CREATED, Json(book)))
}

async fn list_books_handler(State(state): State<Arc<BookState>>) -> ApiResult<Json<Vec<Book>>> {
    let books = state.repository.list()?;

    if books.is_empty() && state.empty_as_not_found {
        return Err(ApiError::NoBooks);
    }

    Ok(Json(books))
}

async fn get_book_handler(
    State(state): State<Arc<BookState>>,
    id: Result<Path<BookId>, PathRejection>,
) -> ApiResult<Json<Book>> {
    let Path(id) = id?;
    Ok(Json(state.repository.get(id)?))
}

async fn update_book_handler(
    State(state): State<Arc<BookState>>,
    id: Result<Path<BookId>, PathRejection>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> ApiResult<Json<Book>> {
    let Path(id) = id?;
    let Json(request) = payload?;

    if request.id != id {
        tracing::debug!(path_id = id, body_id = request.id, "update id mismatch");
        return Err(ApiError::IdMismatch);
    }

    let book = state.repository.update(id, request.into_patch())?;
    tracing::info!(id, "book updated");

    Ok(Json(book))
}

async fn delete_book_handler(
    State(state): State<Arc<BookState>>,
    id: Result<Path<BookId>, PathRejection>,
) -> ApiResult<Json<DeleteBookResponse>> {
    let Path(id) = id?;

    state.repository.delete(id)?;
    tracing::info!(id, "book deleted");

    Ok(Json(DeleteBookResponse::for_id(id)))
}
