//! Display formatting for Libris
//!
//! Pure formatting functions that turn models into terminal output. All
//! presentation concerns (date formats, list headers) live here.

pub mod book;
pub mod member;
pub mod record;

pub use book::{format_book_line, format_book_list};
pub use member::{format_member_line, format_member_list};
pub use record::{format_record_line, format_record_list};
