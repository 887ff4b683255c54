//! Reports module for BudgetBuddy
//!
//! The aggregation engine and the views built from it: the budget summary
//! and the spending charts.

pub mod aggregate;
pub mod chart;
pub mod summary;

pub use aggregate::{
    budget_status, category_totals, daily_totals, remaining, total_spent, usage_level,
    usage_percentage, BudgetStatus, UsageLevel, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
pub use chart::{CategorySlice, DailyBar, SpendingChart};
pub use summary::{BudgetSummary, GoalProgress};
