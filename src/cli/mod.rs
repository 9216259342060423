//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Subcommands are
//! one-shot views over the seeded in-memory dataset; there is deliberately
//! no state carried between invocations.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::display::{format_book_list, format_member_list, format_record_list};
use crate::error::LibraryResult;
use crate::export::{export_full_json, export_records_csv};
use crate::services::{CatalogService, CirculationService, RosterService};
use crate::storage::Library;

/// Output format for the export subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Print all books
pub fn handle_books(library: &Library) -> LibraryResult<()> {
    let books = CatalogService::new(library).list()?;
    print!("{}", format_book_list(&books));
    Ok(())
}

/// Print all members
pub fn handle_members(library: &Library) -> LibraryResult<()> {
    let members = RosterService::new(library).list()?;
    print!("{}", format_member_list(&members));
    Ok(())
}

/// Print the circulation ledger
pub fn handle_records(library: &Library) -> LibraryResult<()> {
    let records = CirculationService::new(library).list_records_resolved()?;
    print!("{}", format_record_list(&records));
    Ok(())
}

/// Write a snapshot of the library to stdout in the requested format
pub fn handle_export(library: &Library, format: ExportFormat) -> LibraryResult<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match format {
        ExportFormat::Json => export_full_json(library, &mut writer)?,
        ExportFormat::Csv => export_records_csv(library, &mut writer)?,
    }

    writer.flush()?;
    Ok(())
}
