//! Configuration module for BudgetBuddy
//!
//! This module provides configuration management including:
//! - data directory resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::BuddyPaths;
pub use settings::Settings;
