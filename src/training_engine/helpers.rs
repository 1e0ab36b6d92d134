//! Small shared builders: result messages, accuracy rounding, exercise ids.
//!
//! The trainer and the registry both assemble results and statistics the same
//! way, so the wording and the rounding live here in one place.

use rand::RngCore;

use crate::training_engine::models::{AnswerResult, Exercise};

pub const SUCCESS_MESSAGE: &str = "Correct! Great job!";
pub const NO_ACTIVE_EXERCISE: &str = "No active exercise";

/// Failure wording always carries the expected answer.
pub fn failure_message(expected: i64) -> String {
    format!("Incorrect. Correct answer: {expected}")
}

/// Percentage of correct answers rounded to one decimal; `0.0` with no answers.
///
/// Ties on the exact binary value round half-to-even (6.25 → 6.2).
pub fn accuracy(correct: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = correct as f64 / total as f64 * 100.0;
    format!("{pct:.1}").parse().unwrap_or(0.0)
}

/// Negative or NaN timings collapse to zero.
pub fn elapsed_or_zero(elapsed: f64) -> f64 {
    if elapsed.is_finite() && elapsed > 0.0 {
        elapsed
    } else {
        0.0
    }
}

/// Build the result record for one checked answer.
pub fn answer_result(exercise: &Exercise, submitted: i64, elapsed: f64) -> AnswerResult {
    let expected = exercise.expected_answer();
    let is_correct = submitted == expected;
    AnswerResult {
        is_correct,
        submitted_answer: submitted,
        expected_answer: expected,
        message: if is_correct {
            SUCCESS_MESSAGE.to_string()
        } else {
            failure_message(expected)
        },
        elapsed_time: elapsed_or_zero(elapsed),
    }
}

/// Opaque exercise id, e.g. `"EX-00C0FFEE12345678"`.
pub fn make_exercise_id(rng: &mut impl RngCore) -> String {
    format!("EX-{:016X}", rng.next_u64())
}
