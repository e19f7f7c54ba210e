//! Domain error types

use thiserror::Error;

/// Quiz engine errors.
///
/// Only invalid call order is an error. Duplicate subscriber names and
/// repeated answers are defined behaviour (overwrite and no-op).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("No question has been dispatched yet")]
    NotStarted,

    #[error("Question {index} is out of range (quiz has {count} questions)")]
    OutOfRange { index: usize, count: usize },
}

impl QuizError {
    /// Check if this error means the caller asked too early
    pub fn is_not_started(&self) -> bool {
        matches!(self, QuizError::NotStarted)
    }
}
