//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_groups, format_expense_table};
use crate::error::{BuddyError, BuddyResult};
use crate::models::ExpenseCategory;
use crate::services::{
    categories_in_use, group_by_date, CreateExpenseInput, ExpenseFilter, ExpenseService,
};
use crate::storage::{KeyValueStore, Ledger};

use super::report_save_status;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category (Food, Rent, Transportation, Entertainment, Education,
        /// Utilities, Shopping, Health, Other)
        #[arg(short, long, default_value = "Food")]
        category: String,
        /// Date the expense applies to (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Optional description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Search description and category
        #[arg(short, long)]
        search: Option<String>,
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Group by day instead of showing a table
        #[arg(short, long)]
        grouped: bool,
    },

    /// Delete an expense by ID (full UUID or a unique prefix)
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },

    /// List the categories expenses can be filed under (* marks those in use)
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BuddyResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();
    let mut service = ExpenseService::new(ledger);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let outcome = service.create(CreateExpenseInput {
                amount,
                category,
                date,
                description,
            })?;
            println!("Added expense:");
            print!("{}", format_expense_details(&outcome.record, symbol, date_format));
            report_save_status(&outcome.save_status);
        }

        ExpenseCommands::List {
            search,
            category,
            limit,
            grouped,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(term) = search {
                filter = filter.search(term);
            }
            if let Some(category) = category {
                let category: ExpenseCategory = category
                    .parse()
                    .map_err(|e: crate::models::UnknownCategory| {
                        BuddyError::Validation(e.to_string())
                    })?;
                filter = filter.category(category);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = service.list(&filter);
            if grouped {
                print!("{}", format_expense_groups(&group_by_date(&expenses), symbol));
            } else {
                print!("{}", format_expense_table(&expenses, symbol, date_format));
            }
        }

        ExpenseCommands::Delete { id } => {
            let outcome = service.delete(&id)?;
            println!(
                "Deleted expense {} ({})",
                outcome.record.id,
                outcome.record.amount.format_with_symbol(symbol)
            );
            report_save_status(&outcome.save_status);
        }

        ExpenseCommands::Categories => {
            let in_use = categories_in_use(&service.list(&ExpenseFilter::new()));
            for category in ExpenseCategory::ALL {
                if in_use.contains(&category) {
                    println!("{} *", category);
                } else {
                    println!("{}", category);
                }
            }
        }
    }

    Ok(())
}
