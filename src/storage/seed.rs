//! Startup sample data
//!
//! Seeds the in-memory library with a small demo dataset. There is no
//! persistence, so every run starts from this (or from an empty library
//! with `--no-seed`).

use crate::error::LibraryResult;
use crate::models::{Book, Member};

use super::Library;

/// Seed two sample books and two sample members
pub fn seed_sample_data(library: &Library) -> LibraryResult<()> {
    library.catalog.add_book(Book::new(
        "The Great Gatsby",
        "F. Scott Fitzgerald",
        "9780743273565",
    ))?;
    library
        .catalog
        .add_book(Book::new("1984", "George Orwell", "9780451524935"))?;

    library.roster.add_member(Member::new("Alice", 1))?;
    library.roster.add_member(Member::new("Bob", 2))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let library = Library::new();
        seed_sample_data(&library).unwrap();

        assert_eq!(library.catalog.count().unwrap(), 2);
        assert_eq!(library.roster.count().unwrap(), 2);
        assert_eq!(library.ledger.count().unwrap(), 0);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let library = Library::new();
        seed_sample_data(&library).unwrap();
        seed_sample_data(&library).unwrap();

        assert_eq!(library.catalog.count().unwrap(), 2);
        assert_eq!(library.roster.count().unwrap(), 2);
    }
}
