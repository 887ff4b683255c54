//! Export module for BudgetBuddy
//!
//! Expenses to CSV for spreadsheets, and the full ledger to JSON.

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
