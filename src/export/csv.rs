//! CSV export functionality
//!
//! Exports the circulation ledger to CSV, with book and member names
//! resolved through the catalog and roster.

use std::io::Write;

use crate::error::{LibraryError, LibraryResult};
use crate::services::CirculationService;
use crate::storage::Library;

/// Export all borrow records to CSV
pub fn export_records_csv<W: Write>(library: &Library, writer: &mut W) -> LibraryResult<()> {
    let resolved = CirculationService::new(library).list_records_resolved()?;

    writeln!(writer, "ISBN,Title,Member ID,Member,Borrowed,Returned")
        .map_err(|e| LibraryError::Export(e.to_string()))?;

    for entry in resolved {
        let title = entry
            .book
            .as_ref()
            .map(|b| b.title.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        let member_name = entry
            .member
            .as_ref()
            .map(|m| m.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        let returned = entry
            .record
            .returned_at
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        writeln!(
            writer,
            "{},{},{},{},{},{}",
            escape_csv(entry.record.isbn.as_str()),
            escape_csv(&title),
            entry.record.member_id,
            escape_csv(&member_name),
            entry.record.borrowed_at.format("%Y-%m-%d"),
            returned
        )
        .map_err(|e| LibraryError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a CSV field if it contains special characters
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
