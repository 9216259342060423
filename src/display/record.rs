//! Borrow record display formatting
//!
//! The only place where timestamps are rendered; everything upstream keeps
//! them as opaque `DateTime<Utc>` values.

use crate::services::ResolvedRecord;

/// Format a resolved record for display.
///
/// The book and member joins cannot miss during a normal run; the fallback
/// renders the bare keys rather than panicking.
pub fn format_record_line(resolved: &ResolvedRecord) -> String {
    let book = match &resolved.book {
        Some(book) => book.to_string(),
        None => format!("ISBN {}", resolved.record.isbn),
    };

    let member = match &resolved.member {
        Some(member) => member.to_string(),
        None => format!("member {}", resolved.record.member_id),
    };

    let returned = match resolved.record.returned_at {
        Some(at) => at.format("%Y-%m-%d").to_string(),
        None => "Not returned".to_string(),
    };

    format!(
        "{} borrowed by {} on {} - {}",
        book,
        member,
        resolved.record.borrowed_at.format("%Y-%m-%d"),
        returned
    )
}

/// Format the full ledger with a header, one record per line
pub fn format_record_list(records: &[ResolvedRecord]) -> String {
    let mut output = String::from("Borrow Records:\n");

    if records.is_empty() {
        output.push_str("(none)\n");
        return output;
    }

    for resolved in records {
        output.push_str(&format_record_line(resolved));
        output.push('\n');
    }

    output
}
