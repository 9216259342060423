use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use libris::cli::{handle_books, handle_export, handle_members, handle_records, ExportFormat};
use libris::menu;
use libris::storage::{seed_sample_data, Library};

#[derive(Parser)]
#[command(
    name = "libris",
    version,
    about = "Terminal-based library catalog and circulation tracker",
    long_about = "Libris tracks books, members, and borrow/return transactions \
                  in memory for the duration of a session. Run it without a \
                  subcommand for the interactive menu."
)]
struct Cli {
    /// Start with an empty library instead of the sample data
    #[arg(long)]
    no_seed: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all books in the catalog
    Books,

    /// List all registered members
    Members,

    /// List the circulation ledger
    Records,

    /// Write a snapshot of the library to stdout
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let library = Library::new();
    if !cli.no_seed {
        seed_sample_data(&library)?;
    }

    match cli.command {
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            menu::run(&library, &mut stdin.lock(), &mut stdout.lock())?;
        }
        Some(Commands::Books) => handle_books(&library)?,
        Some(Commands::Members) => handle_members(&library)?,
        Some(Commands::Records) => handle_records(&library)?,
        Some(Commands::Export { format }) => handle_export(&library, format)?,
    }

    Ok(())
}
