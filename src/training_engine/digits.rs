use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::training_engine::error::{TrainerError, TrainerResult};

pub const MIN_DIGITS: u8 = 1;
pub const MAX_DIGITS: u8 = 3;

/// Number of decimal digits in a generated operand, always 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DigitCount(u8);

impl DigitCount {
    pub const ONE: DigitCount = DigitCount(1);
    pub const TWO: DigitCount = DigitCount(2);
    pub const THREE: DigitCount = DigitCount(3);

    pub const ALL: [DigitCount; 3] = [Self::ONE, Self::TWO, Self::THREE];

    /// Validate a raw digit count; anything outside 1..=3 is rejected.
    pub fn new(digits: i64) -> TrainerResult<Self> {
        if (MIN_DIGITS as i64..=MAX_DIGITS as i64).contains(&digits) {
            Ok(DigitCount(digits as u8))
        } else {
            Err(TrainerError::InvalidDigitCount(digits))
        }
    }

    /// Force a raw value into 1..=3. Never fails.
    pub fn clamped(digits: i64) -> Self {
        DigitCount(digits.clamp(MIN_DIGITS as i64, MAX_DIGITS as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Smallest number with this many digits (1, 10, 100).
    pub fn lower_bound(self) -> u32 {
        10u32.pow(self.0 as u32 - 1)
    }

    /// Largest number with this many digits (9, 99, 999).
    pub fn upper_bound(self) -> u32 {
        10u32.pow(self.0 as u32) - 1
    }
}

impl TryFrom<i64> for DigitCount {
    type Error = TrainerError;

    fn try_from(digits: i64) -> TrainerResult<Self> {
        DigitCount::new(digits)
    }
}

impl From<DigitCount> for u8 {
    fn from(d: DigitCount) -> u8 {
        d.0
    }
}

impl fmt::Display for DigitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Draw a uniformly random number with exactly `digits` digits.
pub fn generate_number<R: Rng>(rng: &mut R, digits: DigitCount) -> u32 {
    rng.gen_range(digits.lower_bound()..=digits.upper_bound())
}

/// Draw a digit count uniformly from `min..=max`.
pub fn pick_digits<R: Rng>(rng: &mut R, min: DigitCount, max: DigitCount) -> DigitCount {
    DigitCount(rng.gen_range(min.0..=max.0))
}
