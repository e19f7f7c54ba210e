//! Quiz run value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal outcome of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishState {
    /// Every question was dispatched before time ran out
    Completed,
    /// The countdown reached zero first
    TimedOut,
}

impl FinishState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishState::Completed => "completed",
            FinishState::TimedOut => "timed_out",
        }
    }
}

impl fmt::Display for FinishState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle of a quiz engine: `Idle → Running → Finished`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Finished(FinishState),
}

impl RunState {
    pub fn is_finished(&self) -> bool {
        matches!(self, RunState::Finished(_))
    }

    pub fn finish_state(&self) -> Option<FinishState> {
        match self {
            RunState::Finished(state) => Some(*state),
            _ => None,
        }
    }
}

/// Scoring constants applied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Points added for each correct answer
    pub points_per_correct: u32,
    /// Seconds removed from the clock for each wrong answer
    pub wrong_answer_penalty_secs: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_per_correct: 1,
            wrong_answer_penalty_secs: 5,
        }
    }
}

impl ScoringRules {
    pub fn with_points_per_correct(mut self, points: u32) -> Self {
        self.points_per_correct = points;
        self
    }

    pub fn with_wrong_answer_penalty(mut self, seconds: u32) -> Self {
        self.wrong_answer_penalty_secs = seconds;
        self
    }
}

/// Snapshot of a quiz run, typically taken once it has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub score: u32,
    pub finish_state: Option<FinishState>,
    pub answered: usize,
    pub correct: usize,
    pub total_questions: usize,
    pub time_left: u32,
}

impl QuizOutcome {
    pub fn incorrect(&self) -> usize {
        self.answered.saturating_sub(self.correct)
    }
}
