//! Catalog service
//!
//! Validated book management over the catalog store.

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Book, Isbn};
use crate::storage::Library;

/// Service for catalog management
pub struct CatalogService<'a> {
    library: &'a Library,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service
    pub fn new(library: &'a Library) -> Self {
        Self { library }
    }

    /// Add a book to the catalog. Re-adding an ISBN overwrites the entry.
    pub fn add(&self, title: &str, author: &str, isbn: &str) -> LibraryResult<Book> {
        let book = Book::new(title.trim(), author.trim(), isbn);

        book.validate()
            .map_err(|e| LibraryError::Validation(e.to_string()))?;

        self.library.catalog.add_book(book.clone())?;
        Ok(book)
    }

    /// Find a book by ISBN
    pub fn find(&self, isbn: &Isbn) -> LibraryResult<Option<Book>> {
        self.library.catalog.get(isbn)
    }

    /// List all books
    pub fn list(&self) -> LibraryResult<Vec<Book>> {
        self.library.catalog.get_all()
    }

    /// Count books
    pub fn count(&self) -> LibraryResult<usize> {
        self.library.catalog.count()
    }
}
