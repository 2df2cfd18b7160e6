use std::sync::Mutex;

use super::{check_cell, trim_trailing_blanks, RowStore};
use crate::error::{RecordError, Result};

/// In-process row store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    columns: Mutex<Vec<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from whole columns, column 1 first.
    pub fn with_columns<I, C, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns
            .into_iter()
            .map(|c| c.into_iter().map(Into::into).collect())
            .collect();
        Self {
            columns: Mutex::new(columns),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Vec<String>>>> {
        self.columns
            .lock()
            .map_err(|_| RecordError::Store("memory store lock poisoned".into()))
    }
}

impl RowStore for MemoryStore {
    fn read_column(&self, col: usize) -> Result<Vec<String>> {
        check_cell(1, col)?;
        let columns = self.lock()?;
        let mut cells = columns.get(col - 1).cloned().unwrap_or_default();
        trim_trailing_blanks(&mut cells);
        Ok(cells)
    }

    fn write_cell(&self, row: usize, col: usize, value: &str) -> Result<()> {
        check_cell(row, col)?;
        let mut columns = self.lock()?;
        if columns.len() < col {
            columns.resize_with(col, Vec::new);
        }
        let column = &mut columns[col - 1];
        if column.len() < row {
            column.resize(row, String::new());
        }
        column[row - 1] = value.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let store = MemoryStore::new();
        store.write_cell(1, 2, "Bench").unwrap();
        store.write_cell(2, 2, "100.0").unwrap();
        assert_eq!(store.read_column(2).unwrap(), vec!["Bench", "100.0"]);
        assert!(store.read_column(1).unwrap().is_empty());
    }

    #[test]
    fn gaps_read_as_empty_cells() {
        let store = MemoryStore::new();
        store.write_cell(3, 1, "120").unwrap();
        assert_eq!(store.read_column(1).unwrap(), vec!["", "", "120"]);
    }

    #[test]
    fn trailing_blanks_are_trimmed() {
        let store = MemoryStore::with_columns([vec!["Squat", "100", ""]]);
        assert_eq!(store.read_column(1).unwrap(), vec!["Squat", "100"]);
    }

    #[test]
    fn overwrite_replaces_value() {
        let store = MemoryStore::with_columns([vec!["Squat", "100"]]);
        store.write_cell(2, 1, "105").unwrap();
        assert_eq!(store.read_column(1).unwrap(), vec!["Squat", "105"]);
    }
}
