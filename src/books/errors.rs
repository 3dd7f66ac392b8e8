//! # Book Store Errors

use thiserror::Error;

use super::model::BookId;

/// Result type for book store operations
pub type BookResult<T> = Result<T, BookError>;

/// Book store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("Book with ID {0} not found")]
    NotFound(BookId),

    #[error("Book store lock poisoned")]
    LockPoisoned,
}
