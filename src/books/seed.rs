//! Starter catalog loaded when `seed_books` is enabled.

use super::model::Book;

const CATALOG: &[(&str, &str, &str)] = &[
    ("1984", "George Orwell", "Dystopian novel about surveillance."),
    ("To Kill a Mockingbird", "Harper Lee", "Novel about racial injustice."),
    ("Pride and Prejudice", "Jane Austen", "Romantic novel set in the 19th century."),
    ("The Great Gatsby", "F. Scott Fitzgerald", "Novel about the American dream."),
    ("Moby Dick", "Herman Melville", "A story of a captain's obsession with a whale."),
    ("War and Peace", "Leo Tolstoy", "Historical novel about Napoleonic wars."),
    ("The Catcher in the Rye", "J.D. Salinger", "A story about teenage rebellion."),
    ("The Hobbit", "J.R.R. Tolkien", "Fantasy novel about a hobbit's journey."),
    (
        "Harry Potter and the Philosopher's Stone",
        "J.K. Rowling",
        "A young wizard's adventure begins.",
    ),
    (
        "The Lord of the Rings",
        "J.R.R. Tolkien",
        "Epic fantasy about the fight against evil.",
    ),
];

/// The seed catalog, numbered from 1
pub fn seed_catalog() -> Vec<Book> {
    CATALOG
        .iter()
        .zip(1..)
        .map(|(&(title, author, description), id)| Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            description: Some(description.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let books = seed_catalog();
        assert_eq!(books.len(), 10);
        for (i, book) in books.iter().enumerate() {
            assert_eq!(book.id, i as i64 + 1);
        }
        assert_eq!(books[0].title, "1984");
        assert_eq!(books[9].author, "J.R.R. Tolkien");
    }
}
