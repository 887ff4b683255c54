//! Budget goal period
//!
//! The period is a label on the goal. Totals are not scoped to it: the goal
//! is always compared against everything in the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cadence a budget goal nominally applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GoalPeriod {
    Weekly,
    #[default]
    Monthly,
    Semester,
}

impl GoalPeriod {
    pub const ALL: [GoalPeriod; 3] = [Self::Weekly, Self::Monthly, Self::Semester];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Semester => "Semester",
        }
    }
}

impl fmt::Display for GoalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GoalPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                format!(
                    "Unknown budget period '{}' (expected Weekly, Monthly or Semester)",
                    trimmed
                )
            })
    }
}
