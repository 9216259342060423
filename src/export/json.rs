//! JSON export functionality
//!
//! Exports a snapshot of the in-memory library to JSON with schema
//! versioning. The snapshot goes to a writer (normally stdout); nothing is
//! ever read back, so this is not persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Book, BorrowRecord, Member};
use crate::services::{CatalogService, CirculationService, RosterService};
use crate::storage::Library;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full library snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All books
    pub books: Vec<Book>,

    /// All members
    pub members: Vec<Member>,

    /// The full ledger in insertion order
    pub records: Vec<BorrowRecord>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of books
    pub book_count: usize,

    /// Total number of members
    pub member_count: usize,

    /// Total number of borrow records
    pub record_count: usize,

    /// Number of loans still open
    pub open_record_count: usize,
}

/// Build a snapshot of the current library state
pub fn build_export(library: &Library) -> LibraryResult<LibraryExport> {
    let books = CatalogService::new(library).list()?;
    let members = RosterService::new(library).list()?;
    let records = CirculationService::new(library).list_records()?;

    let metadata = ExportMetadata {
        book_count: books.len(),
        member_count: members.len(),
        record_count: records.len(),
        open_record_count: records.iter().filter(|r| !r.is_returned()).count(),
    };

    Ok(LibraryExport {
        schema_version: EXPORT_SCHEMA_VERSION.to_string(),
        exported_at: Utc::now(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        books,
        members,
        records,
        metadata,
    })
}

/// Export the full library as pretty-printed JSON
pub fn export_full_json<W: Write>(library: &Library, writer: &mut W) -> LibraryResult<()> {
    let export = build_export(library)?;
    let json = serde_json::to_string_pretty(&export)?;

    writer
        .write_all(json.as_bytes())
        .map_err(|e| LibraryError::Export(e.to_string()))?;
    writer
        .write_all(b"\n")
        .map_err(|e| LibraryError::Export(e.to_string()))?;

    Ok(())
}
