//! Budget summary
//!
//! Total spending plus, when a goal is set, how that spending compares to
//! it. Without a goal there is nothing to compare against, so the
//! remaining/status/usage figures are simply absent.

use crate::models::{BudgetGoal, Expense, GoalPeriod, Money};
use crate::storage::LedgerSnapshot;

use super::aggregate::{
    budget_status, remaining, total_spent, usage_level, usage_percentage, BudgetStatus,
    UsageLevel,
};

/// Spending measured against the active goal
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub goal_amount: Money,
    pub period: GoalPeriod,
    pub notes: Option<String>,
    /// Goal minus spending, negative when over
    pub remaining: Money,
    pub status: BudgetStatus,
    /// Whole percent in `0..=100`
    pub usage_percentage: u8,
    pub usage_level: UsageLevel,
}

impl GoalProgress {
    fn compute(total: Money, goal: &BudgetGoal) -> Self {
        let remaining = remaining(total, goal);
        let usage_percentage = usage_percentage(total, goal.amount);
        Self {
            goal_amount: goal.amount,
            period: goal.period,
            notes: goal.notes.clone(),
            remaining,
            status: budget_status(remaining),
            usage_percentage,
            usage_level: usage_level(usage_percentage),
        }
    }

    /// Remaining budget as shown to the user: the magnitude, with an
    /// "over budget" suffix once overspent
    pub fn remaining_label(&self, currency_symbol: &str) -> String {
        let amount = self.remaining.abs().format_with_symbol(currency_symbol);
        match self.status {
            BudgetStatus::Under => amount,
            BudgetStatus::Over => format!("{} over budget", amount),
        }
    }
}

/// Headline numbers for the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_spent: Money,
    pub expense_count: usize,
    pub progress: Option<GoalProgress>,
}

impl BudgetSummary {
    pub fn generate(expenses: &[Expense], goal: Option<&BudgetGoal>) -> Self {
        let total = total_spent(expenses);
        Self {
            total_spent: total,
            expense_count: expenses.len(),
            progress: goal.map(|g| GoalProgress::compute(total, g)),
        }
    }

    pub fn from_snapshot(snapshot: &LedgerSnapshot) -> Self {
        Self::generate(&snapshot.expenses, snapshot.goal.as_ref())
    }
}
