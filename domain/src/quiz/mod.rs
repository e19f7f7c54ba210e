//! Quiz run orchestration: engine, countdown and scoring rules.

pub mod engine;
pub mod timer;
pub mod value_objects;

pub use engine::QuizEngine;
pub use timer::Timer;
pub use value_objects::{FinishState, QuizOutcome, RunState, ScoringRules};
