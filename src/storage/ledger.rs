//! Circulation ledger store
//!
//! Append-only, insertion-ordered history of borrow records. Records are
//! never deleted or reordered; closing a loan stamps `returned_at` in place.

use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::error::{LibraryError, LibraryResult};
use crate::models::{BorrowRecord, Isbn, MemberId};

/// Append-only store for borrow records
#[derive(Default)]
pub struct Ledger {
    data: RwLock<Vec<BorrowRecord>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the history
    pub fn append(&self, record: BorrowRecord) -> LibraryResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(record);
        Ok(())
    }

    /// Find the first open record matching both keys, scanning in insertion
    /// order. At most one open record can exist per book (the circulation
    /// service refuses to lend an unavailable book), so first match is the
    /// only match; the debug assertion checks that instead of assuming it.
    pub fn find_open(&self, isbn: &Isbn, member_id: MemberId) -> LibraryResult<Option<BorrowRecord>> {
        let data = self
            .data
            .read()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        debug_assert!(
            data.iter().filter(|r| !r.is_returned() && r.isbn == *isbn).count() <= 1,
            "more than one open record for ISBN {}",
            isbn
        );

        Ok(data
            .iter()
            .find(|r| r.is_open_for(isbn, member_id))
            .cloned())
    }

    /// Close the first open record matching both keys, stamping the return
    /// time under a single write lock. Returns the closed record, or `None`
    /// if no open record matched.
    pub fn close_record(
        &self,
        isbn: &Isbn,
        member_id: MemberId,
        returned_at: DateTime<Utc>,
    ) -> LibraryResult<Option<BorrowRecord>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        for record in data.iter_mut() {
            if record.is_open_for(isbn, member_id) {
                record.close(returned_at);
                return Ok(Some(record.clone()));
            }
        }

        Ok(None)
    }

    /// Snapshot of the full history in insertion order
    pub fn get_all(&self) -> LibraryResult<Vec<BorrowRecord>> {
        let data = self
            .data
            .read()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Count open records for a book (used for invariant checks)
    pub fn open_count(&self, isbn: &Isbn) -> LibraryResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .filter(|r| !r.is_returned() && r.isbn == *isbn)
            .count())
    }

    /// Count all records
    pub fn count(&self) -> LibraryResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
