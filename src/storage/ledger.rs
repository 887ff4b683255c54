//! The ledger store
//!
//! Owns the expense list and the optional budget goal, and mirrors both into
//! a [`KeyValueStore`] after every mutation. Nothing outside this type can
//! mutate the collections; readers get borrowed slices or a cloned
//! [`LedgerSnapshot`].

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{BuddyError, BuddyResult};
use crate::models::{BudgetGoal, Expense, ExpenseId};

use super::kv::KeyValueStore;

/// Key holding the serialized expense list
pub const EXPENSES_KEY: &str = "expenses";

/// Key holding the serialized budget goal
pub const GOAL_KEY: &str = "budgetGoal";

/// A point-in-time copy of the ledger
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSnapshot {
    pub expenses: Vec<Expense>,
    pub goal: Option<BudgetGoal>,
}

/// Outcome of mirroring a mutation into the durable store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// The durable store matches memory
    Saved,
    /// Nothing was written because the initial load has not happened yet
    Deferred,
    /// The write failed; memory is still authoritative for this session
    Failed(String),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// Warning text for the user, if durability degraded
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Failed(reason) => Some(format!(
                "Changes are kept for this session but could not be saved: {}",
                reason
            )),
            _ => None,
        }
    }
}

/// In-memory ledger synchronized with a durable key-value store
#[derive(Debug)]
pub struct Ledger<S: KeyValueStore> {
    store: S,
    expenses: Vec<Expense>,
    goal: Option<BudgetGoal>,
    loaded: bool,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Create an empty, not yet loaded ledger over `store`
    ///
    /// Mutations made before [`Ledger::load_state`] stay in memory only, so
    /// an empty default can never overwrite what is already on disk.
    pub fn new(store: S) -> Self {
        Self {
            store,
            expenses: Vec::new(),
            goal: None,
            loaded: false,
        }
    }

    /// Create a ledger and load the persisted state
    pub fn open(store: S) -> Self {
        let mut ledger = Self::new(store);
        ledger.load_state();
        ledger
    }

    /// Read the persisted snapshot into memory
    ///
    /// Never fails: a missing or unreadable key yields the empty default
    /// for that key.
    pub fn load_state(&mut self) -> LedgerSnapshot {
        self.expenses = self.read_key::<Vec<Expense>>(EXPENSES_KEY).unwrap_or_default();
        self.goal = self.read_key::<BudgetGoal>(GOAL_KEY);
        self.loaded = true;

        debug!(
            expenses = self.expenses.len(),
            has_goal = self.goal.is_some(),
            "ledger loaded"
        );

        self.snapshot()
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "no persisted value");
                return None;
            }
            Err(e) => {
                debug!(key, error = %e, "persisted value unreadable, using default");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key, error = %e, "persisted value malformed, using default");
                None
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budget_goal(&self) -> Option<&BudgetGoal> {
        self.goal.as_ref()
    }

    /// Find an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            expenses: self.expenses.clone(),
            goal: self.goal.clone(),
        }
    }

    /// Append an expense
    ///
    /// The id is trusted to be fresh; no duplicate check is made. An expense
    /// with a non-positive amount is rejected and nothing changes.
    pub fn add_expense(&mut self, expense: Expense) -> BuddyResult<SaveStatus> {
        expense
            .validate()
            .map_err(|e| BuddyError::Validation(e.to_string()))?;

        debug!(id = %expense.id, amount = %expense.amount, "adding expense");
        self.expenses.push(expense);
        Ok(self.persist())
    }

    /// Remove the expense with `id`. A missing id is a no-op.
    pub fn delete_expense(&mut self, id: ExpenseId) -> SaveStatus {
        if let Some(pos) = self.expenses.iter().position(|e| e.id == id) {
            debug!(%id, "deleting expense");
            self.expenses.remove(pos);
        }
        self.persist()
    }

    /// Replace the budget goal
    pub fn set_budget_goal(&mut self, goal: BudgetGoal) -> BuddyResult<SaveStatus> {
        goal.validate()
            .map_err(|e| BuddyError::Validation(e.to_string()))?;

        debug!(id = %goal.id, amount = %goal.amount, period = %goal.period, "setting budget goal");
        self.goal = Some(goal);
        Ok(self.persist())
    }

    fn persist(&mut self) -> SaveStatus {
        if !self.loaded {
            debug!("ledger not loaded yet, skipping save");
            return SaveStatus::Deferred;
        }

        match self.write_snapshot() {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                warn!(error = %e, "failed to persist ledger");
                SaveStatus::Failed(e.to_string())
            }
        }
    }

    fn write_snapshot(&mut self) -> BuddyResult<()> {
        let expenses = serde_json::to_string(&self.expenses)?;
        self.store.set(EXPENSES_KEY, &expenses)?;

        match &self.goal {
            Some(goal) => {
                let goal = serde_json::to_string(goal)?;
                self.store.set(GOAL_KEY, &goal)?;
            }
            None => self.store.remove(GOAL_KEY)?,
        }

        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the durable store, dropping the in-memory state
    pub fn into_store(self) -> S {
        self.store
    }
}
