//! Service layer for BudgetBuddy
//!
//! The service layer is the validation boundary: it turns raw form values
//! into model values and hands them to the ledger.

pub mod expense;
pub mod goal;

pub use expense::{
    categories_in_use, group_by_date, CreateExpenseInput, ExpenseFilter, ExpenseService,
};
pub use goal::{GoalService, SetGoalInput};

use crate::storage::SaveStatus;

/// A record produced by a mutation, with how its save went
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub record: T,
    pub save_status: SaveStatus,
}

impl<T> Outcome<T> {
    pub fn new(record: T, save_status: SaveStatus) -> Self {
        Self {
            record,
            save_status,
        }
    }
}
