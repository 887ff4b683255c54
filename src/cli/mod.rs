//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod goal;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};

use crate::storage::SaveStatus;

/// Print a warning when a mutation was applied but not written to disk
pub(crate) fn report_save_status(status: &SaveStatus) {
    if let Some(warning) = status.warning() {
        eprintln!("Warning: {}", warning);
    }
}
