//! Budget goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::BuddyResult;
use crate::services::{GoalService, SetGoalInput};
use crate::storage::{KeyValueStore, Ledger};

use super::report_save_status;

/// Budget goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Set or replace the budget goal
    Set {
        /// Spending ceiling (e.g., "500" or "500.00")
        amount: String,
        /// Budget period (Weekly, Monthly, Semester); an existing goal keeps its own
        #[arg(short, long)]
        period: Option<String>,
        /// Optional notes; pass "" to clear
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Show the current budget goal
    Show,
}

/// Handle a goal command
pub fn handle_goal_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    cmd: GoalCommands,
) -> BuddyResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = GoalService::new(ledger);

    match cmd {
        GoalCommands::Set {
            amount,
            period,
            notes,
        } => {
            let outcome = service.set(
                SetGoalInput {
                    amount,
                    period,
                    notes,
                },
                settings.default_goal_period,
            )?;
            println!(
                "Budget goal has been set: {} ({})",
                outcome.record.amount.format_with_symbol(symbol),
                outcome.record.period
            );
            report_save_status(&outcome.save_status);
        }

        GoalCommands::Show => match service.current() {
            Some(goal) => {
                println!("Budget Goal:   {}", goal.amount.format_with_symbol(symbol));
                println!("Budget Period: {}", goal.period);
                if let Some(notes) = &goal.notes {
                    println!("Notes:         {}", notes);
                }
                println!("Set on:        {}", goal.created_at.format("%Y-%m-%d %H:%M"));
            }
            None => println!("No budget goal set."),
        },
    }

    Ok(())
}
