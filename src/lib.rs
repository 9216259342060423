//! Libris - Terminal-based library catalog and circulation tracker
//!
//! This library provides the core functionality for the Libris application:
//! an in-memory catalog of books, a roster of members, and an append-only
//! circulation ledger, driven by an interactive console menu. All state
//! lives in memory and is gone when the process exits.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (books, members, borrow records)
//! - `storage`: In-memory store layer (catalog, roster, ledger)
//! - `services`: Business logic layer, including the borrow/return engine
//! - `display`: Terminal output formatting
//! - `export`: JSON/CSV snapshot export
//! - `menu`: Interactive console driver
//! - `cli`: Non-interactive subcommand handlers
//!
//! # Example
//!
//! ```rust
//! use libris::models::{Isbn, MemberId};
//! use libris::services::CirculationService;
//! use libris::storage::{seed_sample_data, Library};
//!
//! let library = Library::new();
//! seed_sample_data(&library)?;
//!
//! let circulation = CirculationService::new(&library);
//! circulation.borrow(&Isbn::new("9780451524935"), MemberId::new(1))?;
//! # Ok::<(), libris::LibraryError>(())
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod export;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LibraryError, LibraryResult};
