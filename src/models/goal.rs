//! Budget goal model
//!
//! At most one goal is active. Setting a goal replaces the previous one,
//! keeping its id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;
use super::period::GoalPeriod;

/// The spending ceiling the ledger is measured against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGoal {
    pub id: GoalId,

    /// Spending ceiling (always positive)
    pub amount: Money,

    pub period: GoalPeriod,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl BudgetGoal {
    /// Create a new goal with a fresh id
    pub fn new(amount: Money, period: GoalPeriod) -> Self {
        Self {
            id: GoalId::new(),
            amount,
            period,
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// Builder-style notes setter. Blank notes are stored as absent.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    /// Build the replacement for this goal: same id, new values
    pub fn replaced_by(&self, amount: Money, period: GoalPeriod) -> Self {
        Self {
            id: self.id,
            ..Self::new(amount, period)
        }
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if !self.amount.is_positive() {
            return Err(GoalValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(GoalValidationError::TooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for BudgetGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.period, self.amount)
    }
}

/// Validation errors for budget goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    NonPositiveAmount(Money),
    TooLarge(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Budget amount must be greater than zero (got {})", amount)
            }
            Self::TooLarge(amount) => write!(
                f,
                "Budget amount must not exceed {} (got {})",
                Money::MAX_AMOUNT,
                amount
            ),
        }
    }
}

impl std::error::Error for GoalValidationError {}
