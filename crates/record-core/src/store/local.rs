//! Local row store backed by redb.
//!
//! # Table design
//!
//! A single `CELLS` table keyed by `(column, row)`:
//! ```text
//! (col: u32, row: u32) -> cell text
//! ```
//!
//! Tuple keys order by column first, so one range scan over
//! `(col, 0)..=(col, u32::MAX)` yields a column top to bottom.

use std::path::Path;

use redb::{Database, TableDefinition};

use super::{check_cell, trim_trailing_blanks, RowStore};
use crate::error::{RecordError, Result};

// ---------------------------------------------------------------------------
// Table definition
// ---------------------------------------------------------------------------

const CELLS: TableDefinition<(u32, u32), &str> = TableDefinition::new("cells");

fn db_err(e: impl std::fmt::Display) -> RecordError {
    RecordError::Store(e.to_string())
}

fn index(n: usize) -> Result<u32> {
    u32::try_from(n).map_err(|_| RecordError::Store(format!("cell index {n} is too large")))
}

// ---------------------------------------------------------------------------
// RedbStore
// ---------------------------------------------------------------------------

/// Row store persisted to a single redb file.
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open or create the database at `path`.
    ///
    /// Creates parent directories and the `CELLS` table if missing.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path).map_err(db_err)?;
        // Ensure the table exists before any reads
        let wt = db.begin_write().map_err(db_err)?;
        wt.open_table(CELLS).map_err(db_err)?;
        wt.commit().map_err(db_err)?;
        Ok(Self { db })
    }
}

impl RowStore for RedbStore {
    fn read_column(&self, col: usize) -> Result<Vec<String>> {
        check_cell(1, col)?;
        let col = index(col)?;
        let rt = self.db.begin_read().map_err(db_err)?;
        let table = rt.open_table(CELLS).map_err(db_err)?;

        let mut cells: Vec<String> = Vec::new();
        for entry in table.range((col, 1)..=(col, u32::MAX)).map_err(db_err)? {
            let (key, value) = entry.map_err(db_err)?;
            let (_, row) = key.value();
            let slot = row as usize - 1;
            if cells.len() <= slot {
                cells.resize(slot + 1, String::new());
            }
            cells[slot] = value.value().to_string();
        }
        trim_trailing_blanks(&mut cells);
        Ok(cells)
    }

    fn write_cell(&self, row: usize, col: usize, value: &str) -> Result<()> {
        check_cell(row, col)?;
        let key = (index(col)?, index(row)?);
        let wt = self.db.begin_write().map_err(db_err)?;
        {
            let mut table = wt.open_table(CELLS).map_err(db_err)?;
            table.insert(key, value).map_err(db_err)?;
        }
        wt.commit().map_err(db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, RedbStore) {
        let dir = TempDir::new().unwrap();
        let store = RedbStore::open(&dir.path().join("lifts.redb")).unwrap();
        (dir, store)
    }

    #[test]
    fn empty_column_reads_empty() {
        let (_dir, store) = open_temp();
        assert!(store.read_column(1).unwrap().is_empty());
    }

    #[test]
    fn columns_are_independent() {
        let (_dir, store) = open_temp();
        store.write_cell(1, 1, "Squat").unwrap();
        store.write_cell(2, 1, "140.0").unwrap();
        store.write_cell(1, 2, "Bench").unwrap();

        assert_eq!(store.read_column(1).unwrap(), vec!["Squat", "140.0"]);
        assert_eq!(store.read_column(2).unwrap(), vec!["Bench"]);
        assert!(store.read_column(3).unwrap().is_empty());
    }

    #[test]
    fn rows_come_back_in_order_with_gaps() {
        let (_dir, store) = open_temp();
        store.write_cell(3, 1, "c").unwrap();
        store.write_cell(1, 1, "a").unwrap();
        assert_eq!(store.read_column(1).unwrap(), vec!["a", "", "c"]);
    }

    #[test]
    fn data_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/lifts.redb");
        {
            let store = RedbStore::open(&path).unwrap();
            store.write_cell(1, 3, "Deadlift").unwrap();
            store.write_cell(2, 3, "200.0").unwrap();
        }
        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.read_column(3).unwrap(), vec!["Deadlift", "200.0"]);
    }

    #[test]
    fn overwrite_replaces_value() {
        let (_dir, store) = open_temp();
        store.write_cell(2, 1, "100").unwrap();
        store.write_cell(2, 1, "110").unwrap();
        assert_eq!(store.read_column(1).unwrap(), vec!["", "110"]);
    }
}
