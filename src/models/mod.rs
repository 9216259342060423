//! Core data models for Libris
//!
//! This module contains the data structures that represent the circulation
//! domain: books, members, and borrow records.

pub mod book;
pub mod ids;
pub mod member;
pub mod record;

pub use book::{Book, BookValidationError};
pub use ids::{Isbn, MemberId};
pub use member::{Member, MemberValidationError};
pub use record::BorrowRecord;
