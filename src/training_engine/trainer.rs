use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::training_engine::{
    config::TrainerConfig,
    digits::DigitCount,
    error::{TrainerError, TrainerResult},
    generator, helpers,
    models::{AnswerResult, Exercise, Tally, TrainingStats},
};

/// Exercise generator and answer checker with running statistics.
///
/// One instance per session; it does no locking. The random source is a type
/// parameter so tests can inject a seeded generator.
#[derive(Debug, Clone)]
pub struct Trainer<R = StdRng> {
    min_digits: DigitCount,
    max_digits: DigitCount,
    last_exercise: Option<Exercise>,
    tally: Tally,
    rng: R,
}

impl Trainer<StdRng> {
    /// Entropy-seeded trainer.
    pub fn new(min_digits: i64, max_digits: i64) -> Self {
        Self::with_rng(min_digits, max_digits, StdRng::from_entropy())
    }

    /// Deterministic trainer: the same seed gives the same exercise sequence.
    pub fn with_seed(min_digits: i64, max_digits: i64, seed: u64) -> Self {
        Self::with_rng(min_digits, max_digits, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &TrainerConfig) -> Self {
        match config.rng_seed {
            Some(seed) => Self::with_seed(config.min_digits, config.max_digits, seed),
            None       => Self::new(config.min_digits, config.max_digits),
        }
    }
}

impl Default for Trainer<StdRng> {
    fn default() -> Self {
        Self::from_config(&TrainerConfig::default())
    }
}

impl<R: Rng> Trainer<R> {
    pub fn with_rng(min_digits: i64, max_digits: i64, rng: R) -> Self {
        let (min_digits, max_digits) = clamp_bounds(min_digits, max_digits);
        Trainer { min_digits, max_digits, last_exercise: None, tally: Tally::default(), rng }
    }

    /// Change the digit range. Out-of-range values are clamped into 1..=3 and
    /// `min` is lowered to `max` if it ends up larger. Statistics and the last
    /// exercise are kept.
    pub fn configure(&mut self, min_digits: i64, max_digits: i64) {
        let (min, max) = clamp_bounds(min_digits, max_digits);
        self.min_digits = min;
        self.max_digits = max;
        info!(min_digits = min.get(), max_digits = max.get(), "difficulty configured");
    }

    pub fn min_digits(&self) -> DigitCount {
        self.min_digits
    }

    pub fn max_digits(&self) -> DigitCount {
        self.max_digits
    }

    pub fn last_exercise(&self) -> Option<&Exercise> {
        self.last_exercise.as_ref()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Generate a new exercise and remember it as the current one.
    pub fn generate_exercise(&mut self) -> Exercise {
        let exercise = generator::generate_exercise(&mut self.rng, self.min_digits, self.max_digits);
        self.last_exercise = Some(exercise);
        exercise
    }

    /// Check `submitted` against `exercise` and update the tally.
    pub fn check_answer(&mut self, exercise: &Exercise, submitted: i64, elapsed: f64) -> AnswerResult {
        let result = helpers::answer_result(exercise, submitted, elapsed);
        self.tally.record(result.is_correct);
        debug!(
            %exercise,
            submitted,
            is_correct = result.is_correct,
            total = self.tally.total(),
            "answer checked"
        );
        result
    }

    /// Check `submitted` against the most recently generated exercise.
    pub fn check_current_answer(&mut self, submitted: i64, elapsed: f64) -> TrainerResult<AnswerResult> {
        let exercise = self.last_exercise.ok_or(TrainerError::NoActiveExercise)?;
        Ok(self.check_answer(&exercise, submitted, elapsed))
    }

    pub fn stats(&self) -> TrainingStats {
        self.tally.stats()
    }

    /// Zero the counters; difficulty and the current exercise stay as they are.
    pub fn reset_stats(&mut self) {
        self.tally.reset();
        info!("statistics reset");
    }

    /// `"<first> <op> <second> = ?"`, or `"No active exercise"` before the first one.
    pub fn current_exercise_text(&self) -> String {
        match &self.last_exercise {
            Some(ex) => ex.to_string(),
            None     => helpers::NO_ACTIVE_EXERCISE.to_string(),
        }
    }
}

fn clamp_bounds(min_digits: i64, max_digits: i64) -> (DigitCount, DigitCount) {
    let min = DigitCount::clamped(min_digits);
    let max = DigitCount::clamped(max_digits);
    if min.get() as i64 != min_digits || max.get() as i64 != max_digits {
        warn!(min_digits, max_digits, "digit bounds out of range, clamped");
    }
    (min.min(max), max)
}
