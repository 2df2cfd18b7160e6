use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Exercise
// ---------------------------------------------------------------------------

/// A tracked lift. Each exercise owns one column of the row store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    Squat,
    Bench,
    Deadlift,
}

impl Exercise {
    pub fn all() -> &'static [Exercise] {
        &[Exercise::Squat, Exercise::Bench, Exercise::Deadlift]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Exercise::Squat => "squat",
            Exercise::Bench => "bench",
            Exercise::Deadlift => "deadlift",
        }
    }

    /// 1-based column index in the row store.
    pub fn column(self) -> usize {
        match self {
            Exercise::Squat => 1,
            Exercise::Bench => 2,
            Exercise::Deadlift => 3,
        }
    }

    /// Label written to row 1 of the exercise's column.
    pub fn header(self) -> &'static str {
        match self {
            Exercise::Squat => "Squat",
            Exercise::Bench => "Bench",
            Exercise::Deadlift => "Deadlift",
        }
    }

    /// Name used in replies to `get` commands.
    pub fn display_name(self) -> &'static str {
        match self {
            Exercise::Squat => "squat",
            Exercise::Bench => "bench press",
            Exercise::Deadlift => "deadlift",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Exercise {
    type Err = crate::error::RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "squat" => Ok(Exercise::Squat),
            "bench" | "bench press" => Ok(Exercise::Bench),
            "deadlift" => Ok(Exercise::Deadlift),
            _ => Err(crate::error::RecordError::UnknownExercise(s.to_string())),
        }
    }
}
