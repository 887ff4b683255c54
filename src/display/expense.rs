//! Expense display formatting

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

use super::report::truncate;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a date with a user-supplied strftime pattern, falling back to ISO
/// when the pattern cannot be rendered
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(date_format)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

/// Format expenses as a table
pub fn format_expense_table(
    expenses: &[Expense],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: format_date(e.date, date_format),
        category: e.category.to_string(),
        description: truncate(&e.description, 30),
        amount: e.amount.format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format day groups the way the list view shows them: a day heading,
/// then one line per expense
pub fn format_expense_groups(
    groups: &[(NaiveDate, Vec<Expense>)],
    currency_symbol: &str,
) -> String {
    if groups.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    for (date, expenses) in groups {
        output.push_str(&format!("{}\n", date.format("%a, %b %-d")));
        for expense in expenses {
            let description = if expense.description.is_empty() {
                String::new()
            } else {
                format!(" - {}", truncate(&expense.description, 30))
            };
            output.push_str(&format!(
                "  {} {}{} {:>12}\n",
                expense.id,
                expense.category,
                description,
                expense.amount.format_with_symbol(currency_symbol)
            ));
        }
    }
    output
}

/// Format a single expense for confirmation messages
pub fn format_expense_details(
    expense: &Expense,
    currency_symbol: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", format_date(expense.date, date_format)));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use crate::services::group_by_date;

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$", "%Y-%m-%d"), "No expenses found.\n");
    }

    #[test]
    fn test_table_contains_rows() {
        let expense =
            Expense::with_description(Money::from_cents(1250), ExpenseCategory::Food, jan(10), "Lunch");
        let table = format_expense_table(&[expense], "$", "%Y-%m-%d");

        assert!(table.contains("Category"));
        assert!(table.contains("2024-01-10"));
        assert!(table.contains("Lunch"));
        assert!(table.contains("$12.50"));
    }

    #[test]
    fn test_dates_follow_date_format() {
        let expense = Expense::new(Money::from_cents(1250), ExpenseCategory::Food, jan(10));

        let table = format_expense_table(&[expense.clone()], "$", "%d/%m/%Y");
        assert!(table.contains("10/01/2024"));
        assert!(!table.contains("2024-01-10"));

        let details = format_expense_details(&expense, "$", "%b %-d, %Y");
        assert!(details.contains("Date:        Jan 10, 2024"));
    }

    #[test]
    fn test_unrenderable_date_format_falls_back_to_iso() {
        assert_eq!(format_date(jan(10), "%Q"), "2024-01-10");
    }

    #[test]
    fn test_groups() {
        let expenses = vec![
            Expense::new(Money::from_cents(100), ExpenseCategory::Rent, jan(10)),
            Expense::new(Money::from_cents(200), ExpenseCategory::Food, jan(9)),
        ];
        let output = format_expense_groups(&group_by_date(&expenses), "€");

        assert!(output.contains("Wed, Jan 10"));
        assert!(output.contains("Tue, Jan 9"));
        assert!(output.contains("€2.00"));
    }

    #[test]
    fn test_details_skip_empty_description() {
        let expense = Expense::new(Money::from_cents(100), ExpenseCategory::Rent, jan(10));
        let details = format_expense_details(&expense, "$", "%Y-%m-%d");
        assert!(details.contains("Category:    Rent"));
        assert!(!details.contains("Description"));
    }
}
