//! Expense model
//!
//! One spending event. Expenses are created and deleted, never edited in
//! place.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, fixed at creation
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    pub category: ExpenseCategory,

    /// Free text, may be empty
    #[serde(default)]
    pub description: String,

    /// The calendar day the expense applies to
    pub date: NaiveDate,

    /// When the record was created. Only used to order expenses that share
    /// a date.
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(amount: Money, category: ExpenseCategory, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category,
            description: String::new(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Create an expense with a description
    pub fn with_description(
        amount: Money,
        category: ExpenseCategory,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(amount, category, date);
        expense.description = description.into();
        expense
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(ExpenseValidationError::TooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    TooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be greater than zero (got {})", amount)
            }
            Self::TooLarge(amount) => write!(
                f,
                "Expense amount must not exceed {} (got {})",
                Money::MAX_AMOUNT,
                amount
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(Money::from_cents(1250), ExpenseCategory::Food, jan(10));
        assert_eq!(expense.amount.cents(), 1250);
        assert!(expense.description.is_empty());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_fresh_ids() {
        let a = Expense::new(Money::from_cents(100), ExpenseCategory::Food, jan(1));
        let b = Expense::new(Money::from_cents(100), ExpenseCategory::Food, jan(1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let zero = Expense::new(Money::zero(), ExpenseCategory::Rent, jan(1));
        assert_eq!(
            zero.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(Money::zero()))
        );

        let negative = Expense::new(Money::from_cents(-5), ExpenseCategory::Rent, jan(1));
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_amounts_over_the_cap() {
        let at_cap = Expense::new(Money::MAX_AMOUNT, ExpenseCategory::Rent, jan(1));
        assert!(at_cap.validate().is_ok());

        let over = Money::from_cents(Money::MAX_AMOUNT.cents() + 1);
        let expense = Expense::new(over, ExpenseCategory::Rent, jan(1));
        assert_eq!(expense.validate(), Err(ExpenseValidationError::TooLarge(over)));
    }

    #[test]
    fn test_json_layout() {
        let expense = Expense::with_description(
            Money::from_cents(1250),
            ExpenseCategory::Food,
            jan(10),
            "Lunch",
        );
        let value = serde_json::to_value(&expense).unwrap();

        assert_eq!(value["amount"], serde_json::json!(12.5));
        assert_eq!(value["category"], "Food");
        assert_eq!(value["description"], "Lunch");
        assert_eq!(value["date"], "2024-01-10");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_reads_record_without_description() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": 40,
            "category": "Rent",
            "date": "2024-01-10",
            "createdAt": "2024-01-10T08:00:00.000Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount.cents(), 4000);
        assert_eq!(expense.category, ExpenseCategory::Rent);
        assert!(expense.description.is_empty());
    }
}
