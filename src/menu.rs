//! Interactive console menu
//!
//! The console driver: a numbered menu loop over the service layer. I/O is
//! generic over `BufRead`/`Write` so sessions can be driven from tests or
//! piped input; EOF ends the loop cleanly. Malformed input never terminates
//! the process, it prints a line and re-prompts.

use std::io::{BufRead, Write};

use crate::display::{format_book_list, format_member_list, format_record_list};
use crate::error::LibraryResult;
use crate::models::{Isbn, MemberId};
use crate::services::{CatalogService, CirculationService, RosterService};
use crate::storage::Library;

const MENU: &str = "\nMenu:\n\
                    1. Show all books\n\
                    2. Show all members\n\
                    3. Borrow a book\n\
                    4. Return a book\n\
                    5. Show borrow records\n\
                    6. Exit\n";

/// Run the interactive menu loop until the user exits or input ends
pub fn run<R: BufRead, W: Write>(
    library: &Library,
    input: &mut R,
    output: &mut W,
) -> LibraryResult<()> {
    let catalog = CatalogService::new(library);
    let roster = RosterService::new(library);
    let circulation = CirculationService::new(library);

    writeln!(output, "Welcome to Libris")?;

    loop {
        output.write_all(MENU.as_bytes())?;
        let Some(choice) = prompt(input, output, "Choose an option: ")? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                let books = catalog.list()?;
                output.write_all(format_book_list(&books).as_bytes())?;
            }
            "2" => {
                let members = roster.list()?;
                output.write_all(format_member_list(&members).as_bytes())?;
            }
            "3" => {
                let Some((isbn, member_id)) = read_loan_keys(input, output)? else {
                    continue;
                };
                match circulation.borrow(&isbn, member_id) {
                    Ok(_) => writeln!(output, "Book borrowed successfully.")?,
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            "4" => {
                let Some((isbn, member_id)) = read_loan_keys(input, output)? else {
                    continue;
                };
                match circulation.return_book(&isbn, member_id) {
                    Ok(_) => writeln!(output, "Book returned successfully.")?,
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            "5" => {
                let records = circulation.list_records_resolved()?;
                output.write_all(format_record_list(&records).as_bytes())?;
            }
            "6" => {
                writeln!(output, "Exiting system. Goodbye!")?;
                return Ok(());
            }
            _ => {
                writeln!(output, "Invalid choice. Try again.")?;
            }
        }
    }
}

/// Prompt for the member ID and ISBN of a loan. Returns `None` (after
/// printing a message) on malformed or exhausted input.
fn read_loan_keys<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> LibraryResult<Option<(Isbn, MemberId)>> {
    let Some(raw_id) = prompt(input, output, "Enter member ID: ")? else {
        return Ok(None);
    };
    let member_id: MemberId = match raw_id.trim().parse() {
        Ok(id) => id,
        Err(_) => {
            writeln!(output, "Invalid member ID: '{}'", raw_id.trim())?;
            return Ok(None);
        }
    };

    let Some(raw_isbn) = prompt(input, output, "Enter book ISBN: ")? else {
        return Ok(None);
    };
    let isbn = Isbn::from(raw_isbn.as_str());
    if isbn.as_str().is_empty() {
        writeln!(output, "ISBN cannot be empty.")?;
        return Ok(None);
    }

    Ok(Some((isbn, member_id)))
}

/// Write a prompt (no trailing newline) and read one line.
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> LibraryResult<Option<String>> {
    output.write_all(text.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
