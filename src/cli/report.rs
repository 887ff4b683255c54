//! Report CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_chart, format_summary};
use crate::error::BuddyResult;
use crate::reports::{BudgetSummary, SpendingChart, MAX_WINDOW_DAYS};
use crate::services::expense::parse_date;
use crate::storage::{KeyValueStore, Ledger};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Totals and, when a goal is set, remaining budget and usage
    Summary,

    /// Spending by category and per day
    Chart {
        /// Last day of the daily window (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Number of days in the daily window (1-366)
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u32).range(1..=MAX_WINDOW_DAYS as i64)
        )]
        window: Option<u32>,
    },
}

/// Handle a report command
pub fn handle_report_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> BuddyResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary => {
            let summary = BudgetSummary::generate(ledger.expenses(), ledger.budget_goal());
            print!("{}", format_summary(&summary, symbol));
        }

        ReportCommands::Chart { date, window } => {
            let reference = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };
            let window = window.unwrap_or(settings.chart_window_days);
            let chart = SpendingChart::generate(ledger.expenses(), reference, window);
            print!("{}", format_chart(&chart, symbol));
        }
    }

    Ok(())
}
