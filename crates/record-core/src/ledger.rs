//! Personal-record bookkeeping on top of a [`RowStore`].

use serde::Serialize;
use std::fmt;

use crate::error::{RecordError, Result};
use crate::exercise::Exercise;
use crate::store::RowStore;
use crate::weight::{format_kg, normalize_lift};

// ---------------------------------------------------------------------------
// LiftEntry
// ---------------------------------------------------------------------------

/// One recorded lift: its 1-based row, the text as stored and its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiftEntry {
    pub row: usize,
    pub text: String,
    pub kg: f64,
}

// ---------------------------------------------------------------------------
// PrOutcome
// ---------------------------------------------------------------------------

/// Result of recording a lift. `Display` renders the SMS reply.
#[derive(Debug, Clone, PartialEq)]
pub enum PrOutcome {
    NewRecord {
        exercise: Exercise,
        /// Previous best as stored, or `"0"` when there was none.
        previous: String,
        lift: f64,
        margin: f64,
    },
    Added {
        exercise: Exercise,
        lift: f64,
        /// Best entry before this lift, as stored.
        previous: String,
        shortfall: f64,
    },
}

impl PrOutcome {
    pub fn is_new_record(&self) -> bool {
        matches!(self, PrOutcome::NewRecord { .. })
    }

    pub fn lift(&self) -> f64 {
        match self {
            PrOutcome::NewRecord { lift, .. } | PrOutcome::Added { lift, .. } => *lift,
        }
    }
}

impl fmt::Display for PrOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrOutcome::NewRecord {
                exercise,
                previous,
                margin,
                ..
            } => write!(
                f,
                "New {exercise} PR! You beat the previous PR of {previous} kg by {} kg.",
                format_kg(*margin)
            ),
            PrOutcome::Added {
                exercise,
                lift,
                shortfall,
                ..
            } => write!(
                f,
                "Your new {exercise} lift of {} kg has been added. \
                 You were {} kg away from beating your best.",
                format_kg(*lift),
                format_kg(*shortfall)
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// PrLedger
// ---------------------------------------------------------------------------

pub struct PrLedger<'a> {
    store: &'a dyn RowStore,
}

impl<'a> PrLedger<'a> {
    pub fn new(store: &'a dyn RowStore) -> Self {
        Self { store }
    }

    /// Normalize `raw`, append it to the exercise's column and compare it
    /// against the best entry recorded before it.
    ///
    /// The token is validated before the store is touched, so a malformed
    /// lift never writes.
    pub fn update_pr(&self, exercise: Exercise, raw: &str) -> Result<PrOutcome> {
        let lift = normalize_lift(raw)?;
        let col = exercise.column();

        let mut cells = self.store.read_column(col)?;
        if cells.is_empty() {
            self.store.write_cell(1, col, exercise.header())?;
            cells.push(exercise.header().to_string());
        }

        let best = best_entry(data_entries(exercise, &cells)?);
        let next_row = cells.len() + 1;
        self.store.write_cell(next_row, col, &format_kg(lift))?;
        tracing::debug!(%exercise, row = next_row, lift, "recorded lift");

        let (previous, best_kg) = match best {
            Some(entry) => (entry.text, entry.kg),
            None => ("0".to_string(), 0.0),
        };

        if lift > best_kg {
            Ok(PrOutcome::NewRecord {
                exercise,
                previous,
                lift,
                margin: lift - best_kg,
            })
        } else {
            Ok(PrOutcome::Added {
                exercise,
                lift,
                previous,
                shortfall: best_kg - lift,
            })
        }
    }

    /// The best recorded lift, or `None` when only the header exists.
    pub fn get_max(&self, exercise: Exercise) -> Result<Option<LiftEntry>> {
        let cells = self.store.read_column(exercise.column())?;
        Ok(best_entry(data_entries(exercise, &cells)?))
    }

    /// Every recorded lift in insertion order.
    pub fn history(&self, exercise: Exercise) -> Result<Vec<LiftEntry>> {
        let cells = self.store.read_column(exercise.column())?;
        data_entries(exercise, &cells)
    }
}

/// Parse every cell below the header. Blank cells are skipped.
fn data_entries(exercise: Exercise, cells: &[String]) -> Result<Vec<LiftEntry>> {
    cells
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(i, text)| -> Result<LiftEntry> {
            let kg = text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|kg| kg.is_finite())
                .ok_or_else(|| RecordError::CorruptEntry {
                    exercise: exercise.to_string(),
                    row: i + 1,
                    value: text.clone(),
                })?;
            Ok(LiftEntry {
                row: i + 1,
                text: text.clone(),
                kg,
            })
        })
        .collect()
}

/// Highest entry; the earliest one wins a tie.
fn best_entry(entries: Vec<LiftEntry>) -> Option<LiftEntry> {
    entries.into_iter().fold(None, |best, entry| match best {
        Some(b) if b.kg >= entry.kg => Some(b),
        _ => Some(entry),
    })
}
