use std::fmt;

use serde::{Deserialize, Serialize};

use crate::training_engine::{
    error::{TrainerError, TrainerResult},
    helpers,
};

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Addition,
    #[serde(rename = "-")]
    Subtraction,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Addition, Operation::Subtraction];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition    => "+",
            Operation::Subtraction => "-",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Exercise
// ---------------------------------------------------------------------------

/// One generated problem. Fields are read-only; construct through [`Exercise::new`]
/// so both operands are at least 1 and the subtraction ordering and the expected
/// answer always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExerciseParts")]
pub struct Exercise {
    first_operand: u32,
    second_operand: u32,
    operation: Operation,
    expected_answer: i64,
}

/// Wire shape accepted on deserialize; the expected answer is always recomputed.
#[derive(Deserialize)]
struct ExerciseParts {
    first_operand: u32,
    second_operand: u32,
    operation: Operation,
}

impl TryFrom<ExerciseParts> for Exercise {
    type Error = TrainerError;

    fn try_from(p: ExerciseParts) -> TrainerResult<Self> {
        Exercise::new(p.first_operand, p.second_operand, p.operation)
    }
}

impl Exercise {
    /// Build an exercise, swapping subtraction operands so the answer is never negative.
    /// Zero operands are rejected.
    pub fn new(first: u32, second: u32, operation: Operation) -> TrainerResult<Self> {
        if first == 0 || second == 0 {
            return Err(TrainerError::InvalidOperand { first, second });
        }
        Ok(Exercise::from_operands(first, second, operation))
    }

    /// Unchecked constructor for operands already drawn from a digit range.
    pub(crate) fn from_operands(first: u32, second: u32, operation: Operation) -> Self {
        let (first, second) = match operation {
            Operation::Subtraction if first < second => (second, first),
            _ => (first, second),
        };
        let expected_answer = match operation {
            Operation::Addition    => first as i64 + second as i64,
            Operation::Subtraction => first as i64 - second as i64,
        };
        Exercise { first_operand: first, second_operand: second, operation, expected_answer }
    }

    pub fn first_operand(&self) -> u32 {
        self.first_operand
    }

    pub fn second_operand(&self) -> u32 {
        self.second_operand
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn expected_answer(&self) -> i64 {
        self.expected_answer
    }

    /// Question text without the answer prompt, e.g. `"42 - 15"`.
    pub fn question(&self) -> String {
        format!("{} {} {}", self.first_operand, self.operation, self.second_operand)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ?", self.question())
    }
}

// ---------------------------------------------------------------------------
// Answer checking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub submitted_answer: i64,
    pub expected_answer: i64,
    pub message: String,
    /// Seconds the caller measured; informational only.
    pub elapsed_time: f64,
}

/// Running counters. `total == correct + incorrect` is kept by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    correct: u64,
    incorrect: u64,
}

impl Tally {
    pub fn record(&mut self, is_correct: bool) {
        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Tally::default();
    }

    pub fn total(&self) -> u64 {
        self.correct + self.incorrect
    }

    pub fn correct(&self) -> u64 {
        self.correct
    }

    pub fn incorrect(&self) -> u64 {
        self.incorrect
    }

    /// Combine two tallies (used to aggregate across difficulty tiers).
    pub fn merged(self, other: Tally) -> Tally {
        Tally {
            correct: self.correct + other.correct,
            incorrect: self.incorrect + other.incorrect,
        }
    }

    pub fn stats(&self) -> TrainingStats {
        TrainingStats {
            total_exercises: self.total(),
            correct_answers: self.correct,
            incorrect_answers: self.incorrect,
            accuracy: helpers::accuracy(self.correct, self.total()),
        }
    }
}

/// Snapshot of a tally with derived accuracy (percent, one decimal).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingStats {
    pub total_exercises: u64,
    pub correct_answers: u64,
    pub incorrect_answers: u64,
    pub accuracy: f64,
}

/// Statistics aggregated across every tier of an exercise registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    #[serde(flatten)]
    pub stats: TrainingStats,
    /// Per-exercise timing is not aggregated; always `None`.
    pub average_time: Option<f64>,
}
