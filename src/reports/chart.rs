//! Chart data
//!
//! Builds the two spending charts: a breakdown by category and a per-day
//! series over a trailing window.

use chrono::NaiveDate;

use crate::models::{Expense, ExpenseCategory, Money};

use super::aggregate::{category_totals, daily_totals, total_spent};

/// One slice of the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: ExpenseCategory,
    pub total: Money,
    /// Share of all spending, 0.0 to 100.0
    pub percentage: f64,
}

/// One bar of the daily series
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBar {
    pub date: NaiveDate,
    /// Short label such as "Jan 10"
    pub label: String,
    pub total: Money,
}

/// Data behind the analytics view
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingChart {
    pub by_category: Vec<CategorySlice>,
    pub daily: Vec<DailyBar>,
}

impl SpendingChart {
    pub fn generate(expenses: &[Expense], reference: NaiveDate, window_days: u32) -> Self {
        let total = total_spent(expenses);

        let by_category = category_totals(expenses)
            .into_iter()
            .map(|(category, amount)| CategorySlice {
                category,
                total: amount,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    amount.cents() as f64 / total.cents() as f64 * 100.0
                },
            })
            .collect();

        let daily = daily_totals(expenses, reference, window_days)
            .into_iter()
            .map(|(date, amount)| DailyBar {
                date,
                label: date.format("%b %-d").to_string(),
                total: amount,
            })
            .collect();

        Self { by_category, daily }
    }

    /// Largest daily total, for scaling bars
    pub fn daily_max(&self) -> Money {
        self.daily
            .iter()
            .map(|bar| bar.total)
            .max()
            .unwrap_or_default()
    }
}
