//! Book model
//!
//! A catalog entry for a single physical book. Each ISBN identifies exactly
//! one copy; there is no multi-copy inventory.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::Isbn;

/// A book in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Unique catalog key
    pub isbn: Isbn,

    /// Whether the book is on the shelf or out on loan.
    /// Mutated only through ledger transitions.
    pub available: bool,
}

impl Book {
    /// Create a new book, available by default
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<Isbn>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available: true,
        }
    }

    /// Human-readable availability label
    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Borrowed"
        }
    }

    /// Validate the book
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }

        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }

        if self.isbn.as_str().is_empty() {
            return Err(BookValidationError::EmptyIsbn);
        }

        if self.title.len() > 200 {
            return Err(BookValidationError::TitleTooLong(self.title.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} (ISBN: {}) - {}",
            self.title,
            self.author,
            self.isbn,
            self.status_label()
        )
    }
}

/// Validation errors for books
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    EmptyAuthor,
    EmptyIsbn,
    TitleTooLong(usize),
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Book title cannot be empty"),
            Self::EmptyAuthor => write!(f, "Book author cannot be empty"),
            Self::EmptyIsbn => write!(f, "Book ISBN cannot be empty"),
            Self::TitleTooLong(len) => {
                write!(f, "Book title too long ({} chars, max 200)", len)
            }
        }
    }
}

impl std::error::Error for BookValidationError {}
