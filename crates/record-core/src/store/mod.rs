//! Row stores: tabular persistence with one exercise per column.
//!
//! Rows and columns are 1-based. Row 1 of every column holds a header label;
//! lifts follow in insertion order. Columns are not kept row-aligned.

pub mod local;
pub mod memory;
pub mod sheets;

use crate::config::StoreBackend;
use crate::error::{RecordError, Result};
use crate::exercise::Exercise;
use std::path::Path;
use std::sync::Arc;

pub use local::RedbStore;
pub use memory::MemoryStore;
pub use sheets::SheetsStore;

pub trait RowStore: Send + Sync {
    /// All cells of column `col` from row 1 down to the last non-empty cell.
    fn read_column(&self, col: usize) -> Result<Vec<String>>;

    /// Overwrite the cell at (`row`, `col`).
    fn write_cell(&self, row: usize, col: usize, value: &str) -> Result<()>;
}

/// Open the store described by `backend`. Relative paths resolve against `root`.
pub fn open(backend: &StoreBackend, root: &Path) -> Result<Arc<dyn RowStore>> {
    let store: Arc<dyn RowStore> = match backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Redb { path } => Arc::new(RedbStore::open(&root.join(path))?),
        StoreBackend::Sheets {
            spreadsheet_id,
            sheet,
            token_env,
            api_base,
        } => {
            let token = std::env::var(token_env)
                .map_err(|_| RecordError::MissingToken(token_env.clone()))?;
            Arc::new(SheetsStore::new(api_base, spreadsheet_id, sheet, token)?)
        }
    };
    tracing::debug!(backend = backend.kind(), "opened row store");
    Ok(store)
}

/// Write each exercise's header label into row 1 of any empty column.
///
/// Returns the exercises whose header was written.
pub fn seed_headers(store: &dyn RowStore) -> Result<Vec<Exercise>> {
    let mut seeded = Vec::new();
    for &exercise in Exercise::all() {
        if store.read_column(exercise.column())?.is_empty() {
            store.write_cell(1, exercise.column(), exercise.header())?;
            seeded.push(exercise);
        }
    }
    Ok(seeded)
}

pub(crate) fn check_cell(row: usize, col: usize) -> Result<()> {
    if row == 0 || col == 0 {
        return Err(RecordError::Store(format!(
            "cell ({row}, {col}) is out of range: rows and columns start at 1"
        )));
    }
    Ok(())
}

/// Drop empty cells from the end of a column, matching how sheets report them.
pub(crate) fn trim_trailing_blanks(cells: &mut Vec<String>) {
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
}
