use serde::{Deserialize, Serialize};

use crate::training_engine::error::TrainerResult;

/// Settings used to build a [`Trainer`](crate::Trainer).
///
/// Digit bounds are raw integers: out-of-range or inverted values are accepted
/// here and clamped when the trainer is built, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub min_digits: i64,
    pub max_digits: i64,
    /// `Some` makes the exercise sequence reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig { min_digits: 1, max_digits: 3, rng_seed: None }
    }
}

impl TrainerConfig {
    /// Fixed single-tier difficulty (`min == max == digits`).
    pub fn tier(digits: i64) -> Self {
        TrainerConfig { min_digits: digits, max_digits: digits, rng_seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(raw: &str) -> TrainerResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
