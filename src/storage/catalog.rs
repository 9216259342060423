//! Book catalog store
//!
//! In-memory store for books keyed by ISBN. Nothing here touches disk; the
//! catalog lives for the duration of the process.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Book, Isbn};

/// Store for books, keyed by ISBN
#[derive(Default)]
pub struct Catalog {
    data: RwLock<HashMap<Isbn, Book>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for the book's ISBN.
    /// Duplicates are not an error; last write wins.
    pub fn add_book(&self, book: Book) -> LibraryResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(book.isbn.clone(), book);
        Ok(())
    }

    /// Get a book by ISBN
    pub fn get(&self, isbn: &Isbn) -> LibraryResult<Option<Book>> {
        let data = self
            .data
            .read()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(isbn).cloned())
    }

    /// Get all books, sorted by title for stable listings
    pub fn get_all(&self) -> LibraryResult<Vec<Book>> {
        let data = self
            .data
            .read()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut books: Vec<_> = data.values().cloned().collect();
        books.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        Ok(books)
    }

    /// Flip the availability flag of a book.
    ///
    /// The only mutation path for `available`; called exclusively by the
    /// circulation service on borrow/return transitions.
    pub fn set_available(&self, isbn: &Isbn, available: bool) -> LibraryResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let book = data
            .get_mut(isbn)
            .ok_or_else(|| LibraryError::book_not_found(isbn.clone()))?;

        book.available = available;
        Ok(())
    }

    /// Count books in the catalog
    pub fn count(&self) -> LibraryResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let catalog = Catalog::new();
        catalog
            .add_book(Book::new("1984", "George Orwell", "978"))
            .unwrap();

        let book = catalog.get(&Isbn::new("978")).unwrap().unwrap();
        assert_eq!(book.title, "1984");
        assert!(catalog.get(&Isbn::new("missing")).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_isbn_last_write_wins() {
        let catalog = Catalog::new();
        catalog
            .add_book(Book::new("First Edition", "Someone", "978"))
            .unwrap();
        catalog
            .add_book(Book::new("Second Edition", "Someone", "978"))
            .unwrap();

        assert_eq!(catalog.count().unwrap(), 1);
        let book = catalog.get(&Isbn::new("978")).unwrap().unwrap();
        assert_eq!(book.title, "Second Edition");
    }

    #[test]
    fn test_get_all_sorted_by_title() {
        let catalog = Catalog::new();
        catalog.add_book(Book::new("Zebra", "A", "3")).unwrap();
        catalog.add_book(Book::new("apple", "B", "1")).unwrap();
        catalog.add_book(Book::new("Mango", "C", "2")).unwrap();

        let titles: Vec<_> = catalog
            .get_all()
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["apple", "Mango", "Zebra"]);
    }

    #[test]
    fn test_set_available() {
        let catalog = Catalog::new();
        catalog
            .add_book(Book::new("1984", "George Orwell", "978"))
            .unwrap();

        catalog.set_available(&Isbn::new("978"), false).unwrap();
        assert!(!catalog.get(&Isbn::new("978")).unwrap().unwrap().available);

        catalog.set_available(&Isbn::new("978"), true).unwrap();
        assert!(catalog.get(&Isbn::new("978")).unwrap().unwrap().available);
    }

    #[test]
    fn test_set_available_unknown_isbn() {
        let catalog = Catalog::new();
        let result = catalog.set_available(&Isbn::new("missing"), false);
        assert!(matches!(result, Err(LibraryError::BookNotFound { .. })));
    }
}
