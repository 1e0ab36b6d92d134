//! Core training engine: exercise generation, answer checking, statistics.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: operation, exercise, answer result, tally, stats |
//! | `digits`    | Validated digit counts and the uniform operand draw |
//! | `generator` | Pure `generate_exercise()` over any `Rng` |
//! | `helpers`   | Result messages, accuracy rounding, exercise ids |
//! | `trainer`   | `Trainer`: digit bounds, last exercise, running tally |
//! | `registry`  | `ExerciseRegistry`: per-tier trainers and one-shot pending exercises |
//! | `config`    | `TrainerConfig`, loadable from JSON |
//! | `error`     | `TrainerError` |

pub mod config;
pub mod digits;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod registry;
pub mod trainer;

pub use config::TrainerConfig;
pub use digits::DigitCount;
pub use error::{TrainerError, TrainerResult};
pub use models::{AggregateStats, AnswerResult, Exercise, Operation, Tally, TrainingStats};
pub use registry::{ExerciseRegistry, IssuedExercise};
pub use trainer::Trainer;
