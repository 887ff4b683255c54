//! BudgetBuddy - a personal expense tracker with a budget goal
//!
//! This library records expenses and a single spending goal, persists them
//! as JSON, and derives totals, remaining budget, usage and chart series
//! from whatever is currently recorded.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, the budget goal, money, ids)
//! - `storage`: Key-value side-store and the ledger persisted into it
//! - `services`: Input validation and ledger mutations
//! - `reports`: Aggregation engine, budget summary and charts
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers for the `budgetbuddy` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_buddy::config::BuddyPaths;
//! use budget_buddy::reports::BudgetSummary;
//! use budget_buddy::storage::open_ledger;
//!
//! let paths = BuddyPaths::new()?;
//! let ledger = open_ledger(&paths)?;
//! let summary = BudgetSummary::generate(ledger.expenses(), ledger.budget_goal());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BuddyError, BuddyResult};
