//! Circulation service
//!
//! The borrow/return state machine. A book is either `Available` or
//! `Borrowed`; a successful borrow flips it out, a successful return flips
//! it back, and no other transition exists. Every failure leaves the
//! library untouched.

use chrono::Utc;

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Book, BorrowRecord, Isbn, Member, MemberId};
use crate::storage::Library;

/// A borrow record joined with its book and member for presentation.
///
/// The lookups never miss in practice (records are only created for
/// cataloged books, and nothing is removed during a run), but the join is
/// kept total rather than panicking on a gap.
#[derive(Debug, Clone)]
pub struct ResolvedRecord {
    pub record: BorrowRecord,
    pub book: Option<Book>,
    pub member: Option<Member>,
}

/// Service for borrow/return transactions
pub struct CirculationService<'a> {
    library: &'a Library,
}

impl<'a> CirculationService<'a> {
    /// Create a new circulation service
    pub fn new(library: &'a Library) -> Self {
        Self { library }
    }

    /// Borrow a book for a member.
    ///
    /// Fails with `BookNotFound`, `MemberNotFound`, or `BookUnavailable`,
    /// checked in that order. On success exactly one record is appended to
    /// the ledger and the book flips to borrowed.
    pub fn borrow(&self, isbn: &Isbn, member_id: MemberId) -> LibraryResult<BorrowRecord> {
        let book = self
            .library
            .catalog
            .get(isbn)?
            .ok_or_else(|| LibraryError::book_not_found(isbn.clone()))?;

        self.library
            .roster
            .get(member_id)?
            .ok_or_else(|| LibraryError::member_not_found(member_id))?;

        if !book.available {
            return Err(LibraryError::book_unavailable(isbn.clone()));
        }

        let record = BorrowRecord::new(isbn.clone(), member_id, Utc::now());
        self.library.ledger.append(record.clone())?;
        self.library.catalog.set_available(isbn, false)?;

        Ok(record)
    }

    /// Return a book borrowed by a member.
    ///
    /// Fails with `RecordNotFound` when no open record matches both keys:
    /// the book was never borrowed, was borrowed by a different member, or
    /// was already returned. On success the record is stamped with the
    /// return time and the book flips back to available.
    pub fn return_book(&self, isbn: &Isbn, member_id: MemberId) -> LibraryResult<BorrowRecord> {
        let record = self
            .library
            .ledger
            .close_record(isbn, member_id, Utc::now())?
            .ok_or_else(|| LibraryError::record_not_found(isbn.clone(), member_id))?;

        self.library.catalog.set_available(isbn, true)?;

        Ok(record)
    }

    /// List the full ledger in insertion order
    pub fn list_records(&self) -> LibraryResult<Vec<BorrowRecord>> {
        self.library.ledger.get_all()
    }

    /// List the ledger with each record joined to its book and member
    pub fn list_records_resolved(&self) -> LibraryResult<Vec<ResolvedRecord>> {
        let records = self.library.ledger.get_all()?;

        let mut resolved = Vec::with_capacity(records.len());
        for record in records {
            let book = self.library.catalog.get(&record.isbn)?;
            let member = self.library.roster.get(record.member_id)?;
            resolved.push(ResolvedRecord {
                record,
                book,
                member,
            });
        }

        Ok(resolved)
    }
}
