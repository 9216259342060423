//! Book display formatting

use crate::models::Book;

/// Format a single book for display
pub fn format_book_line(book: &Book) -> String {
    book.to_string()
}

/// Format a list of books with a header, one book per line
pub fn format_book_list(books: &[Book]) -> String {
    let mut output = String::from("Books in Library:\n");

    if books.is_empty() {
        output.push_str("(none)\n");
        return output;
    }

    for book in books {
        output.push_str(&format_book_line(book));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_list_header() {
        let books = vec![Book::new("1984", "George Orwell", "978")];
        let output = format_book_list(&books);
        assert!(output.starts_with("Books in Library:\n"));
        assert!(output.contains("1984 by George Orwell (ISBN: 978) - Available"));
    }

    #[test]
    fn test_empty_book_list() {
        assert_eq!(format_book_list(&[]), "Books in Library:\n(none)\n");
    }
}
