//! JSON export of the whole ledger

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BuddyError, BuddyResult};
use crate::models::{BudgetGoal, Expense};
use crate::storage::LedgerSnapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Ledger export document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerExport {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    pub expenses: Vec<Expense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_goal: Option<BudgetGoal>,
}

impl LedgerExport {
    pub fn from_snapshot(snapshot: &LedgerSnapshot) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            expenses: snapshot.expenses.clone(),
            budget_goal: snapshot.goal.clone(),
        }
    }
}

/// Write the ledger as JSON
pub fn export_ledger_json<W: Write>(
    snapshot: &LedgerSnapshot,
    writer: W,
    pretty: bool,
) -> BuddyResult<()> {
    let export = LedgerExport::from_snapshot(snapshot);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BuddyError::Export(e.to_string()))
}
