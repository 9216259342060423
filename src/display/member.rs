//! Member display formatting

use crate::models::Member;

/// Format a single member for display
pub fn format_member_line(member: &Member) -> String {
    member.to_string()
}

/// Format a list of members with a header, one member per line
pub fn format_member_list(members: &[Member]) -> String {
    let mut output = String::from("Library Members:\n");

    if members.is_empty() {
        output.push_str("(none)\n");
        return output;
    }

    for member in members {
        output.push_str(&format_member_line(member));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_list() {
        let members = vec![Member::new("Alice", 1), Member::new("Bob", 2)];
        let output = format_member_list(&members);
        assert!(output.starts_with("Library Members:\n"));
        assert!(output.contains("Alice (ID: 1)"));
        assert!(output.contains("Bob (ID: 2)"));
    }

    #[test]
    fn test_empty_member_list() {
        assert_eq!(format_member_list(&[]), "Library Members:\n(none)\n");
    }
}
