//! Budget goal service

use crate::error::{BuddyError, BuddyResult};
use crate::models::{BudgetGoal, GoalPeriod};
use crate::storage::{KeyValueStore, Ledger};

use super::expense::parse_positive_amount;
use super::Outcome;

/// Raw input for setting the budget goal
#[derive(Debug, Clone, Default)]
pub struct SetGoalInput {
    pub amount: String,
    /// Falls back to the current goal's period, then the caller's default
    pub period: Option<String>,
    pub notes: Option<String>,
}

pub struct GoalService<'a, S: KeyValueStore> {
    ledger: &'a mut Ledger<S>,
}

impl<'a, S: KeyValueStore> GoalService<'a, S> {
    pub fn new(ledger: &'a mut Ledger<S>) -> Self {
        Self { ledger }
    }

    pub fn current(&self) -> Option<&BudgetGoal> {
        self.ledger.budget_goal()
    }

    /// Validate the input and replace the goal
    ///
    /// An existing goal keeps its id, and its period and notes when the
    /// input leaves them out. Empty notes clear them.
    pub fn set(
        &mut self,
        input: SetGoalInput,
        default_period: GoalPeriod,
    ) -> BuddyResult<Outcome<BudgetGoal>> {
        let amount = parse_positive_amount(&input.amount)?;
        let period = input
            .period
            .as_deref()
            .map(str::parse::<GoalPeriod>)
            .transpose()
            .map_err(BuddyError::Validation)?;

        let goal = match self.ledger.budget_goal() {
            Some(existing) => {
                let notes = input
                    .notes
                    .or_else(|| existing.notes.clone())
                    .unwrap_or_default();
                existing
                    .replaced_by(amount, period.unwrap_or(existing.period))
                    .with_notes(notes)
            }
            None => BudgetGoal::new(amount, period.unwrap_or(default_period))
                .with_notes(input.notes.unwrap_or_default()),
        };

        let save_status = self.ledger.set_budget_goal(goal.clone())?;
        Ok(Outcome::new(goal, save_status))
    }
}
