//! Display formatting for terminal output

pub mod expense;
pub mod report;

pub use expense::{format_date, format_expense_details, format_expense_groups, format_expense_table};
pub use report::{format_chart, format_summary};
