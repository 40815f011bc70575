//! CLI commands for data export

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_expenses_csv, export_full_json};
use crate::storage::Storage;

use super::load_strict;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export expense records to CSV
    Csv {
        /// Output file path
        output: PathBuf,
    },

    /// Export the full ledger (records and budgets) to JSON
    Json {
        /// Output file path
        output: PathBuf,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> LedgerResult<()> {
    // A corrupt ledger must not be exported as an empty one
    let store = load_strict(storage)?;

    match cmd {
        ExportCommands::Csv { output } => {
            let writer = create_output(&output)?;
            export_expenses_csv(store.records(), writer)?;
            println!(
                "{} expenses exported to: {}",
                store.len(),
                output.display()
            );
        }
        ExportCommands::Json { output, compact } => {
            let writer = create_output(&output)?;
            export_full_json(store.state(), writer, !compact)?;
            println!("Full ledger exported to: {}", output.display());
        }
    }

    Ok(())
}

fn create_output(output: &Path) -> LedgerResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}
