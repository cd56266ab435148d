//! # redb-backed Handled Set Storage
//!
//! Keeps the set of displayed notifications across process restarts using
//! the redb embedded database.
//!
//! The engine itself only ever sees an in-memory [`HandledSet`]. Callers load
//! it from this store at start-up and record the identifiers each cycle
//! displayed. Records are append-only, matching the set's own contract.

use crate::{HandledSet, LdnError};
use chrono::Utc;
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;

/// Table for displayed notifications: identifier -> unix time it was shown
const HANDLED: TableDefinition<&str, i64> = TableDefinition::new("handled");

fn storage_err(e: impl std::fmt::Display) -> LdnError {
    LdnError::Storage(e.to_string())
}

/// A disk-backed record of displayed notifications.
pub struct HandledStore {
    /// The redb database handle.
    db: Database,
}

impl std::fmt::Debug for HandledStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandledStore").finish_non_exhaustive()
    }
}

impl HandledStore {
    /// Open or create a state database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LdnError> {
        let db = Database::create(path.as_ref()).map_err(storage_err)?;

        // Initialize the table if it doesn't exist
        {
            let write_txn = db.begin_write().map_err(storage_err)?;
            let _ = write_txn.open_table(HANDLED).map_err(storage_err)?;
            write_txn.commit().map_err(storage_err)?;
        }

        Ok(Self { db })
    }

    /// Load every recorded identifier.
    pub fn load(&self) -> Result<HandledSet, LdnError> {
        let read_txn = self.db.begin_read().map_err(storage_err)?;
        let table = read_txn.open_table(HANDLED).map_err(storage_err)?;

        let mut ids = Vec::new();
        for entry in table.iter().map_err(storage_err)? {
            let (key, _) = entry.map_err(storage_err)?;
            ids.push(key.value().to_string());
        }
        Ok(ids.into_iter().collect())
    }

    /// Record identifiers as displayed, in a single transaction.
    ///
    /// Identifiers already present keep their original timestamp.
    /// Returns how many were new.
    pub fn record<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Result<usize, LdnError> {
        let now = Utc::now().timestamp();
        let write_txn = self.db.begin_write().map_err(storage_err)?;
        let mut added = 0usize;
        {
            let mut table = write_txn.open_table(HANDLED).map_err(storage_err)?;
            for id in ids {
                if table.get(id).map_err(storage_err)?.is_some() {
                    continue;
                }
                table.insert(id, now).map_err(storage_err)?;
                added = added.saturating_add(1);
            }
        }
        write_txn.commit().map_err(storage_err)?;
        Ok(added)
    }

    /// Number of recorded identifiers.
    pub fn len(&self) -> Result<u64, LdnError> {
        let read_txn = self.db.begin_read().map_err(storage_err)?;
        let table = read_txn.open_table(HANDLED).map_err(storage_err)?;
        table.len().map_err(storage_err)
    }

    /// True if nothing was recorded yet.
    pub fn is_empty(&self) -> Result<bool, LdnError> {
        Ok(self.len()? == 0)
    }
}

// =============================================================================
// TESTS
// =============================================================================
