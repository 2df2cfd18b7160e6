use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("not initialized: run 'record init'")]
    NotInitialized,

    #[error("invalid lift '{0}': expected a weight like 100, 100kg or 5x100kg")]
    InvalidLift(String),

    #[error("invalid rep count '{0}' in '{1}'")]
    InvalidReps(String, String),

    #[error("unknown exercise: {0}")]
    UnknownExercise(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("{exercise} column has a non-numeric entry '{value}' at row {row}")]
    CorruptEntry {
        exercise: String,
        row: usize,
        value: String,
    },

    #[error("access token not set: export {0}")]
    MissingToken(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RecordError {
    /// True for errors caused by the message text rather than the store.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RecordError::InvalidLift(_)
                | RecordError::InvalidReps(_, _)
                | RecordError::UnknownExercise(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
