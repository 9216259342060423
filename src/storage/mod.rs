//! Storage layer for Libris
//!
//! Purely in-memory stores behind `RwLock`s. The locks buy nothing in
//! today's single-threaded driver, but they keep every borrow/return
//! check-then-act sequence behind an explicit exclusion point, which is
//! the discipline a multi-user re-architecture would need.

pub mod catalog;
pub mod ledger;
pub mod roster;
pub mod seed;

pub use catalog::Catalog;
pub use ledger::Ledger;
pub use roster::Roster;
pub use seed::seed_sample_data;

/// Main store coordinator that owns the three entity stores
#[derive(Default)]
pub struct Library {
    pub catalog: Catalog,
    pub roster: Roster,
    pub ledger: Ledger,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }
}
