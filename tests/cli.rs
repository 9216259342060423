//! End-to-end tests driving the libris binary

use assert_cmd::Command;
use predicates::prelude::*;

fn libris() -> Command {
    Command::cargo_bin("libris").unwrap()
}

#[test]
fn menu_session_list_and_exit() {
    libris()
        .write_stdin("1\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Libris"))
        .stdout(predicate::str::contains("Books in Library:"))
        .stdout(predicate::str::contains(
            "The Great Gatsby by F. Scott Fitzgerald (ISBN: 9780743273565) - Available",
        ))
        .stdout(predicate::str::contains("Library Members:"))
        .stdout(predicate::str::contains("Bob (ID: 2)"))
        .stdout(predicate::str::contains("Exiting system. Goodbye!"));
}

#[test]
fn menu_session_borrow_return_cycle() {
    let session = "3\n1\n9780451524935\n\
                   3\n2\n9780451524935\n\
                   4\n1\n9780451524935\n\
                   4\n1\n9780451524935\n\
                   6\n";

    libris()
        .write_stdin(session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Book borrowed successfully."))
        .stdout(predicate::str::contains(
            "Book is currently borrowed: 9780451524935",
        ))
        .stdout(predicate::str::contains("Book returned successfully."))
        .stdout(predicate::str::contains(
            "No open borrow record for ISBN 9780451524935 and member 1",
        ));
}

#[test]
fn menu_session_records_show_open_loan() {
    libris()
        .write_stdin("3\n1\n9780743273565\n5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Borrow Records:"))
        .stdout(
            predicate::str::contains("borrowed by Alice (ID: 1) on ")
                .and(predicate::str::contains("Not returned")),
        );
}

#[test]
fn menu_session_ends_cleanly_on_eof() {
    libris().write_stdin("1\n").assert().success();
}

#[test]
fn books_subcommand_lists_seeded_catalog() {
    libris()
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1984 by George Orwell (ISBN: 9780451524935) - Available",
        ));
}

#[test]
fn no_seed_flag_starts_empty() {
    libris()
        .args(["--no-seed", "books"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Books in Library:\n(none)"));
}

#[test]
fn export_json_snapshot() {
    let output = libris().args(["export", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["schema_version"], "1.0.0");
    assert_eq!(parsed["metadata"]["book_count"], 2);
    assert_eq!(parsed["metadata"]["member_count"], 2);
    assert_eq!(parsed["metadata"]["record_count"], 0);
}

#[test]
fn export_csv_header() {
    libris()
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ISBN,Title,Member ID,Member,Borrowed,Returned",
        ));
}
