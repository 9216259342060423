//! Export module for Libris
//!
//! Snapshot export of the in-memory library state:
//! - CSV: ledger rows (spreadsheet-compatible)
//! - JSON: machine-readable full snapshot with schema versioning

pub mod csv;
pub mod json;

pub use csv::export_records_csv;
pub use json::{build_export, export_full_json, LibraryExport, EXPORT_SCHEMA_VERSION};
