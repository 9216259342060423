//! Custom error types for Libris
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{Isbn, MemberId};

/// The main error type for Libris operations
#[derive(Error, Debug)]
pub enum LibraryError {
    /// No book with this ISBN exists in the catalog
    #[error("Book not found: {isbn}")]
    BookNotFound { isbn: Isbn },

    /// No member with this ID exists in the roster
    #[error("Member not found: {member_id}")]
    MemberNotFound { member_id: MemberId },

    /// The book exists but is currently out on loan
    #[error("Book is currently borrowed: {isbn}")]
    BookUnavailable { isbn: Isbn },

    /// No open borrow record matches the given book and member
    #[error("No open borrow record for ISBN {isbn} and member {member_id}")]
    RecordNotFound { isbn: Isbn, member_id: MemberId },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store access errors (poisoned locks)
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O errors from the console driver
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LibraryError {
    /// Create a "book not found" error
    pub fn book_not_found(isbn: impl Into<Isbn>) -> Self {
        Self::BookNotFound { isbn: isbn.into() }
    }

    /// Create a "member not found" error
    pub fn member_not_found(member_id: MemberId) -> Self {
        Self::MemberNotFound { member_id }
    }

    /// Create a "book unavailable" error
    pub fn book_unavailable(isbn: impl Into<Isbn>) -> Self {
        Self::BookUnavailable { isbn: isbn.into() }
    }

    /// Create a "record not found" error
    pub fn record_not_found(isbn: impl Into<Isbn>, member_id: MemberId) -> Self {
        Self::RecordNotFound {
            isbn: isbn.into(),
            member_id,
        }
    }

    /// Check if this is a "not found" error (book, member, or record)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BookNotFound { .. } | Self::MemberNotFound { .. } | Self::RecordNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Libris operations
pub type LibraryResult<T> = Result<T, LibraryError>;
