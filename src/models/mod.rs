//! Core data models for BudgetBuddy
//!
//! This module contains the data structures of the ledger: expenses, the
//! budget goal, and the value types they are built from.

pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;

pub use category::{ExpenseCategory, UnknownCategory};
pub use expense::{Expense, ExpenseValidationError};
pub use goal::{BudgetGoal, GoalValidationError};
pub use ids::{ExpenseId, GoalId};
pub use money::{Money, MoneyParseError};
pub use period::GoalPeriod;
