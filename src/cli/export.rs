//! Export CLI commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::error::{BuddyError, BuddyResult};
use crate::export::{export_expenses_csv, export_ledger_json};
use crate::services::ExpenseFilter;
use crate::storage::{KeyValueStore, Ledger};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the ledger
    Ledger {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    cmd: ExportCommands,
) -> BuddyResult<()> {
    match cmd {
        ExportCommands::Ledger { format, output } => {
            let writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
                    BuddyError::Export(format!("Failed to create {}: {}", path.display(), e))
                })?)),
                None => Box::new(io::stdout().lock()),
            };

            match format {
                ExportFormat::Csv => {
                    let expenses = ExpenseFilter::new().apply(ledger.expenses());
                    export_expenses_csv(&expenses, writer)?;
                }
                ExportFormat::Json => {
                    export_ledger_json(&ledger.snapshot(), writer, true)?;
                }
            }

            if let Some(path) = output {
                eprintln!("Exported to {}", path.display());
            }
        }
    }

    Ok(())
}
