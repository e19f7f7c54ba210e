//! Domain layer for code-quiz
//!
//! This crate contains the quiz core: questions, the notifier, the countdown
//! and the engine that scores a run. It has no I/O, no async runtime and no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Notifier
//!
//! A [`Notifier`] maps a subscriber name to a single callback. Connecting
//! twice under one name replaces the first callback.
//!
//! ## Question
//!
//! A [`Question`] holds a prompt, the right answer and its distractors, and
//! moves from `Unanswered` to `Correct` or `Incorrect` exactly once.
//!
//! ## QuizEngine
//!
//! The [`QuizEngine`] owns the questions, the score and the [`Timer`]:
//!
//! - **Correct answer**: score increases by `points_per_correct`
//! - **Wrong answer**: `wrong_answer_penalty_secs` come off the clock
//! - **Finish**: last question passed (`Completed`) or time up (`TimedOut`),
//!   whichever happens first

pub mod core;
pub mod leaderboard;
pub mod notify;
pub mod question;
pub mod quiz;

// Re-export commonly used types
pub use crate::core::error::QuizError;
pub use leaderboard::{Leaderboard, ScoreRecord, ScoreRecordError};
pub use notify::{Callback, Notifier};
pub use question::{AnswerEvent, AnswerState, ChoiceHandle, Question};
pub use quiz::{FinishState, QuizEngine, QuizOutcome, RunState, ScoringRules, Timer};
