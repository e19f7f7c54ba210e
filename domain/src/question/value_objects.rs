//! Question value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer state of a single question.
///
/// `Unanswered` is the only non-terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerState {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

impl AnswerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerState::Unanswered => "unanswered",
            AnswerState::Correct => "correct",
            AnswerState::Incorrect => "incorrect",
        }
    }

    pub fn is_answered(&self) -> bool {
        !matches!(self, AnswerState::Unanswered)
    }
}

impl fmt::Display for AnswerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload of the "answer state changed" notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEvent {
    /// The choice text the user picked
    pub choice: String,
    /// The state the question moved into
    pub state: AnswerState,
}

impl AnswerEvent {
    pub fn new(choice: impl Into<String>, state: AnswerState) -> Self {
        Self {
            choice: choice.into(),
            state,
        }
    }
}

/// Opaque presentation handle used to resolve which choice was picked.
///
/// The core never interprets the value; a terminal front end uses the
/// key the user types, a graphical one could use a widget id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoiceHandle(String);

impl ChoiceHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChoiceHandle {
    fn from(s: &str) -> Self {
        ChoiceHandle::new(s)
    }
}

impl From<String> for ChoiceHandle {
    fn from(s: String) -> Self {
        ChoiceHandle(s)
    }
}
