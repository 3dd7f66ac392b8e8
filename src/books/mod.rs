//! # Book Records
//!
//! Book schema types and the repository that owns them for the lifetime of
//! the process.

pub mod errors;
pub mod model;
pub mod repository;
pub mod seed;

pub use errors::{BookError, BookResult};
pub use model::{Book, BookId, BookPatch, CreateBookRequest, DeleteBookResponse, UpdateBookRequest};
pub use repository::{BookRepository, InMemoryBookRepository};
pub use seed::seed_catalog;
