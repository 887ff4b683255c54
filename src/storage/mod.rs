//! Storage layer for BudgetBuddy
//!
//! The ledger persists into a key-value side-store. On disk that store is a
//! directory of JSON files written atomically.

pub mod file_io;
pub mod kv;
pub mod ledger;

pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use ledger::{Ledger, LedgerSnapshot, SaveStatus, EXPENSES_KEY, GOAL_KEY};

use crate::config::paths::BuddyPaths;
use crate::error::BuddyError;

/// The ledger as used by the command line: backed by the data directory
pub type FileLedger = Ledger<FileStore>;

/// Open the ledger stored under `paths`, creating directories as needed
pub fn open_ledger(paths: &BuddyPaths) -> Result<FileLedger, BuddyError> {
    paths.ensure_directories()?;
    Ok(Ledger::open(FileStore::new(paths.data_dir())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_ledger_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BuddyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let ledger = open_ledger(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(ledger.is_loaded());
        assert!(ledger.expenses().is_empty());
    }
}
