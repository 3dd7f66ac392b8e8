//! # Book Schemas
//!
//! Request and response payloads for the book endpoints. Field types are
//! strict: serde refuses to coerce a number into a string field or a string
//! into the id, and `null` in an optional field means "not provided".

use serde::{Deserialize, Serialize};

/// Book identifier
pub type BookId = i64;

/// A stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

impl Book {
    /// Overwrite every field present in the patch, leaving the rest untouched
    pub fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

/// Body of `POST /books`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT /books/{id}`
///
/// The id is mandatory and must repeat the path id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookRequest {
    pub id: BookId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateBookRequest {
    /// Split off the fields to overwrite
    pub fn into_patch(self) -> BookPatch {
        BookPatch {
            title: self.title,
            author: self.author,
            description: self.description,
        }
    }
}

/// Partial update of a book; `None` leaves the stored value alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
}

/// Body returned by `DELETE /books/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBookResponse {
    pub message: String,
}

impl DeleteBookResponse {
    pub fn for_id(id: BookId) -> Self {
        Self {
            message: format!("Book with ID {} deleted successfully", id),
        }
    }
}
