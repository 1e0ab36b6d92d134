//! # number_drill_gen
//!
//! An offline arithmetic drill generator with deterministic seeding.
//!
//! The library produces addition and subtraction exercises whose operands have
//! between one and three digits, checks submitted answers, and keeps running
//! accuracy statistics. It does no I/O: a console loop, a desktop UI or a web
//! handler all drive the same [`Trainer`].
//!
//! ## How it works
//!
//! 1. Build a [`Trainer`] with a digit range (clamped into 1..=3), optionally
//!    seeded, or from a [`TrainerConfig`].
//! 2. Call [`Trainer::generate_exercise`]: each operand's digit count is drawn
//!    independently, then the operation. Subtraction operands are ordered so
//!    the answer is never negative.
//! 3. Call [`Trainer::check_answer`] with the caller's integer guess; the
//!    returned [`AnswerResult`] carries the verdict and a display message.
//! 4. Read [`Trainer::stats`] for totals and accuracy.
//!
//! Hosts serving many clients keep an [`ExerciseRegistry`]: one trainer per
//! difficulty tier, exercises issued under opaque ids and consumed on check.
//!
//! ## Quick start
//!
//! ```rust
//! use number_drill_gen::{Operation, Trainer};
//!
//! let mut trainer = Trainer::with_seed(1, 2, 42);
//! let exercise = trainer.generate_exercise();
//! println!("{exercise}");
//!
//! let result = trainer.check_answer(&exercise, exercise.expected_answer(), 0.0);
//! assert!(result.is_correct);
//!
//! if exercise.operation() == Operation::Subtraction {
//!     assert!(exercise.first_operand() >= exercise.second_operand());
//! }
//!
//! let stats = trainer.stats();
//! assert_eq!((stats.total_exercises, stats.accuracy), (1, 100.0));
//! ```

pub mod training_engine;

pub use training_engine::{
    AggregateStats, AnswerResult, DigitCount, Exercise, ExerciseRegistry, IssuedExercise,
    Operation, Tally, Trainer, TrainerConfig, TrainerError, TrainerResult, TrainingStats,
};
