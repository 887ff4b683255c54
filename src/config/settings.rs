//! User settings for BudgetBuddy
//!
//! Display preferences and defaults used by the command line. The ledger
//! itself never reads settings.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::BuddyPaths;
use crate::error::BuddyError;
use crate::models::GoalPeriod;
use crate::reports::MAX_WINDOW_DAYS;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for BudgetBuddy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of days in the daily spending chart
    #[serde(default = "default_chart_window_days")]
    pub chart_window_days: u32,

    /// Period preselected when setting a goal without one
    #[serde(default)]
    pub default_goal_period: GoalPeriod,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_chart_window_days() -> u32 {
    7
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            chart_window_days: default_chart_window_days(),
            default_goal_period: GoalPeriod::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &BuddyPaths) -> Result<Self, BuddyError> {
        read_json(paths.settings_file())
            .map_err(|e| BuddyError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BuddyPaths) -> Result<(), BuddyError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Validate user-editable values
    pub fn validate(&self) -> Result<(), BuddyError> {
        if !(1..=MAX_WINDOW_DAYS).contains(&self.chart_window_days) {
            return Err(BuddyError::Config(format!(
                "chart_window_days must be between 1 and {} (got {})",
                MAX_WINDOW_DAYS, self.chart_window_days
            )));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(BuddyError::Config(format!(
                "date_format is not a valid strftime pattern: {}",
                self.date_format
            )));
        }
        Ok(())
    }
}
