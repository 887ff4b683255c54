//! Expense categories
//!
//! The set of categories is closed. User input naming anything else is
//! rejected when parsed; records already on disk with an unknown category
//! are read back into the `Other` bucket so a single odd record cannot make
//! the whole ledger unreadable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The category an expense is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ExpenseCategory {
    /// Groceries, dining, snacks
    #[default]
    Food,
    Rent,
    Transportation,
    Entertainment,
    Education,
    Utilities,
    Shopping,
    Health,
    /// Fallback bucket
    Other,
}

impl ExpenseCategory {
    /// Every category, in display order
    pub const ALL: [ExpenseCategory; 9] = [
        Self::Food,
        Self::Rent,
        Self::Transportation,
        Self::Entertainment,
        Self::Education,
        Self::Utilities,
        Self::Shopping,
        Self::Health,
        Self::Other,
    ];

    /// The canonical name, as stored on disk
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

impl Serialize for ExpenseCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ExpenseCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_else(|_| {
            tracing::debug!(category = %raw, "unknown stored category, filing under Other");
            Self::Other
        }))
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = ExpenseCategory::ALL.iter().map(|c| c.name()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}
