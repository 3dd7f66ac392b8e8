//! # Book Repository
//!
//! The store is a single owner of an ordered list of books. Handlers only see
//! it through [`BookRepository`], so a persistent implementation can replace
//! the in-memory one without touching the HTTP layer.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{BookError, BookResult};
use super::model::{Book, BookId, BookPatch, CreateBookRequest};

/// Storage for book records
pub trait BookRepository: Send + Sync {
    /// All books in insertion order
    fn list(&self) -> BookResult<Vec<Book>>;

    /// Find a book by id
    fn get(&self, id: BookId) -> BookResult<Book>;

    /// Store a new book under the next free id
    fn create(&self, request: CreateBookRequest) -> BookResult<Book>;

    /// Overwrite the fields present in `patch`
    fn update(&self, id: BookId, patch: BookPatch) -> BookResult<Book>;

    /// Remove a book, returning what was removed
    fn delete(&self, id: BookId) -> BookResult<Book>;
}

/// In-memory book repository
///
/// Ids are `max(existing) + 1`, so an id freed by deleting the highest
/// record can be handed out again.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `books`
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    fn read(&self) -> BookResult<RwLockReadGuard<'_, Vec<Book>>> {
        self.books.read().map_err(|_| BookError::LockPoisoned)
    }

    fn write(&self) -> BookResult<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books.write().map_err(|_| BookError::LockPoisoned)
    }

    fn next_id(books: &[Book]) -> BookId {
        books.iter().map(|b| b.id).max().unwrap_or(0) + 1
    }
}

impl BookRepository for InMemoryBookRepository {
    fn list(&self) -> BookResult<Vec<Book>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: BookId) -> BookResult<Book> {
        self.read()?
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(BookError::NotFound(id))
    }

    fn create(&self, request: CreateBookRequest) -> BookResult<Book> {
        let mut books = self.write()?;

        let book = Book {
            id: Self::next_id(&books),
            title: request.title,
            author: request.author,
            description: request.description,
        };
        books.push(book.clone());

        Ok(book)
    }

    fn update(&self, id: BookId, patch: BookPatch) -> BookResult<Book> {
        let mut books = self.write()?;

        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(BookError::NotFound(id))?;
        book.apply(patch);

        Ok(book.clone())
    }

    fn delete(&self, id: BookId) -> BookResult<Book> {
        let mut books = self.write()?;

        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or(BookError::NotFound(id))?;

        Ok(books.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn request(title: &str, author: &str) -> CreateBookRequest {
        CreateBookRequest {
            title: title.to_string(),
            author: author.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_first_id_is_one() {
        let repo = InMemoryBookRepository::new();
        let book = repo.create(request("X", "Y")).unwrap();
        assert_eq!(book.id, 1);
    }

    #[test]
    fn test_id_is_max_plus_one() {
        let repo = InMemoryBookRepository::with_books(vec![
            Book {
                id: 7,
                title: "a".into(),
                author: "b".into(),
                description: None,
            },
            Book {
                id: 3,
                title: "c".into(),
                author: "d".into(),
                description: None,
            },
        ]);

        let book = repo.create(request("X", "Y")).unwrap();
        assert_eq!(book.id, 8);
        assert_eq!(repo.get(8).unwrap(), book);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let repo = InMemoryBookRepository::new();
        repo.create(request("first", "a")).unwrap();
        repo.create(request("second", "b")).unwrap();

        let titles: Vec<_> = repo.list().unwrap().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_get_missing() {
        let repo = InMemoryBookRepository::new();
        assert_eq!(repo.get(1), Err(BookError::NotFound(1)));
    }

    #[test]
    fn test_update_partial() {
        let repo = InMemoryBookRepository::new();
        repo.create(CreateBookRequest {
            title: "Old".into(),
            author: "Author".into(),
            description: Some("Desc".into()),
        })
        .unwrap();

        let updated = repo
            .update(
                1,
                BookPatch {
                    title: Some("New Title".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "New Title");
        assert_eq!(updated.author, "Author");
        assert_eq!(updated.description.as_deref(), Some("Desc"));
        assert_eq!(repo.get(1).unwrap(), updated);
    }

    #[test]
    fn test_update_missing() {
        let repo = InMemoryBookRepository::new();
        let result = repo.update(5, BookPatch::default());
        assert_eq!(result, Err(BookError::NotFound(5)));
    }

    #[test]
    fn test_delete() {
        let repo = InMemoryBookRepository::new();
        repo.create(request("X", "Y")).unwrap();

        let removed = repo.delete(1).unwrap();
        assert_eq!(removed.title, "X");
        assert!(repo.list().unwrap().is_empty());
        assert_eq!(repo.delete(1), Err(BookError::NotFound(1)));
    }

    #[test]
    fn test_concurrent_creates_get_unique_ids() {
        let repo = Arc::new(InMemoryBookRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                thread::spawn(move || {
                    for j in 0..25 {
                        repo.create(request(&format!("{}-{}", i, j), "a")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<_> = repo.list().unwrap().into_iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(ids.last(), Some(&200));
    }
}
