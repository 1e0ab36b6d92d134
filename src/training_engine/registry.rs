//! Per-host registry of pending exercises, one trainer per difficulty tier.
//!
//! A hosting shell (web handler, bot, …) owns one registry. Each issued exercise
//! is stored under an opaque id until it is checked exactly once; a second check
//! on the same id is reported as not found.

use std::collections::{HashMap, VecDeque};

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::training_engine::{
    config::TrainerConfig,
    digits::DigitCount,
    error::{TrainerError, TrainerResult},
    helpers,
    models::{AggregateStats, AnswerResult, Exercise, Operation, Tally},
    trainer::Trainer,
};

/// Pending entries kept before the oldest one is evicted.
pub const DEFAULT_CAPACITY: usize = 1000;

/// What a client sees for a freshly issued exercise (no answer included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedExercise {
    pub exercise_id: String,
    pub question: String,
    pub operation: Operation,
}

#[derive(Debug, Clone)]
struct PendingExercise {
    exercise: Exercise,
    tier: DigitCount,
}

#[derive(Debug)]
pub struct ExerciseRegistry {
    trainers: [Trainer; 3],
    pending: HashMap<String, PendingExercise>,
    /// Pending ids, oldest first.
    issue_order: VecDeque<String>,
    capacity: usize,
    id_rng: StdRng,
}

impl Default for ExerciseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseRegistry {
    pub fn new() -> Self {
        Self::build(TrainerConfig::tier, StdRng::from_entropy())
    }

    /// Deterministic registry; each tier gets its own seed derived from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(
            |tier| TrainerConfig::tier(tier).with_seed(seed.wrapping_add(tier as u64)),
            StdRng::seed_from_u64(seed),
        )
    }

    /// Cap the number of outstanding exercises (at least one). Issuing past the
    /// cap evicts the oldest unchecked exercise; its id then reports not found.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    fn build(tier_config: impl Fn(i64) -> TrainerConfig, id_rng: StdRng) -> Self {
        ExerciseRegistry {
            trainers: DigitCount::ALL.map(|d| Trainer::from_config(&tier_config(d.get() as i64))),
            pending: HashMap::new(),
            issue_order: VecDeque::new(),
            capacity: DEFAULT_CAPACITY,
            id_rng,
        }
    }

    fn trainer_mut(&mut self, tier: DigitCount) -> &mut Trainer {
        &mut self.trainers[tier.get() as usize - 1]
    }

    /// Issue a new exercise for tier `difficulty` (1, 2 or 3).
    pub fn create_exercise(&mut self, difficulty: i64) -> TrainerResult<IssuedExercise> {
        let tier = DigitCount::new(difficulty)
            .map_err(|_| TrainerError::InvalidDifficulty(difficulty))?;

        let exercise = self.trainer_mut(tier).generate_exercise();

        if self.pending.len() >= self.capacity {
            if let Some(evicted) = self.issue_order.pop_front() {
                self.pending.remove(&evicted);
                warn!(exercise_id = %evicted, capacity = self.capacity, "pending exercise evicted");
            }
        }

        let exercise_id = loop {
            let id = helpers::make_exercise_id(&mut self.id_rng);
            if !self.pending.contains_key(&id) {
                break id;
            }
        };
        self.pending.insert(exercise_id.clone(), PendingExercise { exercise, tier });
        self.issue_order.push_back(exercise_id.clone());
        debug!(%exercise_id, tier = tier.get(), "exercise issued");

        Ok(IssuedExercise {
            exercise_id,
            question: exercise.question(),
            operation: exercise.operation(),
        })
    }

    /// Check an answer and consume the exercise id.
    pub fn check_answer(
        &mut self,
        exercise_id: &str,
        answer: i64,
        time_taken: Option<f64>,
    ) -> TrainerResult<AnswerResult> {
        let PendingExercise { exercise, tier } = self
            .pending
            .remove(exercise_id)
            .ok_or_else(|| TrainerError::ExerciseNotFound(exercise_id.to_string()))?;
        self.issue_order.retain(|id| id != exercise_id);

        Ok(self.trainer_mut(tier).check_answer(&exercise, answer, time_taken.unwrap_or(0.0)))
    }

    /// Statistics summed over every tier.
    pub fn stats(&self) -> AggregateStats {
        let tally = self
            .trainers
            .iter()
            .fold(Tally::default(), |acc, t| acc.merged(t.tally()));
        AggregateStats { stats: tally.stats(), average_time: None }
    }

    /// Exercises issued but not yet checked.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_difficulty_is_rejected() {
        let mut reg = ExerciseRegistry::with_seed(1);
        for bad in [0i64, 4, 5, -1] {
            match reg.create_exercise(bad) {
                Err(TrainerError::InvalidDifficulty(d)) => assert_eq!(d, bad),
                other => panic!("expected InvalidDifficulty for {bad}, got {other:?}"),
            }
        }
        assert_eq!(reg.pending_len(), 0);
    }

    #[test]
    fn tier_fixes_operand_length() {
        let mut reg = ExerciseRegistry::with_seed(8);
        for tier in 1..=3i64 {
            for _ in 0..50 {
                let issued = reg.create_exercise(tier).unwrap();
                let operands: Vec<&str> = issued.question.split(' ').collect();
                assert_eq!(operands.len(), 3, "question {:?}", issued.question);
                assert_eq!(operands[1], issued.operation.symbol());
                for n in [operands[0], operands[2]] {
                    assert_eq!(n.len() as i64, tier, "{n} in tier {tier}");
                }
            }
        }
    }

    #[test]
    fn second_check_on_same_id_is_not_found() {
        let mut reg = ExerciseRegistry::with_seed(2);
        let issued = reg.create_exercise(1).unwrap();

        let first = reg.check_answer(&issued.exercise_id, 999, Some(5.0)).unwrap();
        assert!(!first.is_correct);
        assert_eq!(first.elapsed_time, 5.0);

        let second = reg.check_answer(&issued.exercise_id, 999, None).unwrap_err();
        assert!(matches!(second, TrainerError::ExerciseNotFound(ref id) if *id == issued.exercise_id));
        assert_eq!(reg.stats().stats.total_exercises, 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut reg = ExerciseRegistry::with_seed(3);
        let err = reg.check_answer("non-existent", 42, None).unwrap_err();
        assert!(matches!(err, TrainerError::ExerciseNotFound(_)));
    }

    #[test]
    fn stats_aggregate_across_tiers() {
        let mut reg = ExerciseRegistry::with_seed(4);
        let a = reg.create_exercise(1).unwrap();
        let b = reg.create_exercise(2).unwrap();
        let c = reg.create_exercise(3).unwrap();

        // -1 is never a valid answer, so these two are wrong.
        reg.check_answer(&a.exercise_id, -1, None).unwrap();
        reg.check_answer(&b.exercise_id, -1, None).unwrap();
        let expected = {
            let parts: Vec<i64> = c.question.split(' ').filter_map(|s| s.parse().ok()).collect();
            match c.operation {
                Operation::Addition    => parts[0] + parts[1],
                Operation::Subtraction => parts[0] - parts[1],
            }
        };
        assert!(reg.check_answer(&c.exercise_id, expected, None).unwrap().is_correct);

        let stats = reg.stats();
        assert_eq!(stats.stats.total_exercises, 3);
        assert_eq!(stats.stats.correct_answers, 1);
        assert_eq!(stats.stats.incorrect_answers, 2);
        assert_eq!(stats.stats.accuracy, 33.3);
        assert_eq!(stats.average_time, None);
    }

    #[test]
    fn pending_entries_are_capped() {
        let mut reg = ExerciseRegistry::with_seed(6).with_capacity(2);
        for _ in 0..5 {
            reg.create_exercise(2).unwrap();
        }
        assert_eq!(reg.pending_len(), 2);
    }

    #[test]
    fn eviction_drops_the_oldest_pending_exercise() {
        let mut reg = ExerciseRegistry::with_seed(14).with_capacity(2);
        let first = reg.create_exercise(1).unwrap();
        let second = reg.create_exercise(1).unwrap();
        let third = reg.create_exercise(1).unwrap();

        assert!(matches!(
            reg.check_answer(&first.exercise_id, 0, None),
            Err(TrainerError::ExerciseNotFound(_))
        ));
        assert!(reg.check_answer(&second.exercise_id, 0, None).is_ok());
        assert!(reg.check_answer(&third.exercise_id, 0, None).is_ok());
    }

    #[test]
    fn checked_exercises_do_not_count_towards_eviction() {
        let mut reg = ExerciseRegistry::with_seed(15).with_capacity(2);
        let first = reg.create_exercise(2).unwrap();
        let second = reg.create_exercise(2).unwrap();
        reg.check_answer(&first.exercise_id, 0, None).unwrap();

        let third = reg.create_exercise(2).unwrap();
        assert_eq!(reg.pending_len(), 2);
        assert!(reg.check_answer(&second.exercise_id, 0, None).is_ok());
        assert!(reg.check_answer(&third.exercise_id, 0, None).is_ok());
    }

    #[test]
    fn issued_ids_are_unique_and_prefixed() {
        let mut reg = ExerciseRegistry::with_seed(10);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let id = reg.create_exercise(1).unwrap().exercise_id;
            assert!(id.starts_with("EX-") && id.len() == 19, "bad id {id}");
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn issued_exercise_serializes_operation_symbol() {
        let mut reg = ExerciseRegistry::with_seed(12);
        let issued = reg.create_exercise(1).unwrap();
        let json = serde_json::to_value(&issued).unwrap();
        assert_eq!(json["operation"], issued.operation.symbol());
        assert_eq!(json["exercise_id"], issued.exercise_id.as_str());
    }
}
