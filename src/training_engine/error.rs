use thiserror::Error;

/// Errors surfaced by the trainer and the exercise registry.
#[derive(Debug, Error)]
pub enum TrainerError {
    /// A digit count outside 1..=3 reached the number generator boundary.
    #[error("number of digits must be from 1 to 3 (got {0})")]
    InvalidDigitCount(i64),

    /// An exercise was built with an operand below 1.
    #[error("operands must be at least 1 (got {first} and {second})")]
    InvalidOperand { first: u32, second: u32 },

    /// An answer was checked before any exercise was generated.
    #[error("no active exercise")]
    NoActiveExercise,

    /// A registry tier outside 1..=3 was requested.
    #[error("difficulty must be 1, 2, or 3 (got {0})")]
    InvalidDifficulty(i64),

    /// The exercise id is unknown or was already checked.
    #[error("exercise not found: {0}")]
    ExerciseNotFound(String),

    /// The trainer config could not be parsed.
    #[error("invalid trainer config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type TrainerResult<T> = Result<T, TrainerError>;
