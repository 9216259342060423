//! Borrow record model
//!
//! One entry in the append-only circulation ledger. A record references its
//! book and member by key rather than holding the entities themselves, so
//! the ledger never aliases catalog or roster state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{Isbn, MemberId};

/// A single borrow transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRecord {
    /// Key of the borrowed book
    pub isbn: Isbn,

    /// Key of the borrowing member
    pub member_id: MemberId,

    /// When the loan started
    pub borrowed_at: DateTime<Utc>,

    /// When the book came back; `None` while the loan is open.
    /// Write-once: set on return and never cleared or changed.
    pub returned_at: Option<DateTime<Utc>>,
}

impl BorrowRecord {
    /// Create a new open record
    pub fn new(isbn: impl Into<Isbn>, member_id: MemberId, borrowed_at: DateTime<Utc>) -> Self {
        Self {
            isbn: isbn.into(),
            member_id,
            borrowed_at,
            returned_at: None,
        }
    }

    /// Check whether the loan has been closed
    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }

    /// Check whether this record is the open loan for the given keys
    pub fn is_open_for(&self, isbn: &Isbn, member_id: MemberId) -> bool {
        !self.is_returned() && self.isbn == *isbn && self.member_id == member_id
    }

    /// Stamp the return time. Returns `false` (and leaves the record
    /// untouched) if the loan was already closed.
    pub fn close(&mut self, returned_at: DateTime<Utc>) -> bool {
        if self.returned_at.is_some() {
            return false;
        }
        self.returned_at = Some(returned_at);
        true
    }
}
