//! CSV export of expenses

use std::io::Write;

use serde::Serialize;

use crate::error::{BuddyError, BuddyResult};
use crate::models::Expense;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Created At")]
    created_at: String,
}

/// Write expenses as CSV, one row per expense in the given order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> BuddyResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for expense in expenses {
        csv_writer.serialize(CsvRow {
            id: expense.id.as_uuid().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.name(),
            description: &expense.description,
            amount: format!("{:.2}", expense.amount.as_decimal()),
            created_at: expense.created_at.to_rfc3339(),
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| BuddyError::Export(e.to_string()))?;
    Ok(())
}
