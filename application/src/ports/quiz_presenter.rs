//! Quiz presentation port
//!
//! Defines the interface the quiz loop uses to show questions, ticks,
//! answer feedback and the final result.

use quiz_domain::{AnswerEvent, ChoiceHandle, FinishState};

/// A dispatched question, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPrompt {
    /// 1-based position in the run
    pub number: usize,
    /// Number of questions in the run
    pub total: usize,
    pub title: String,
    /// Shuffled choices with the handle the user types to pick each one
    pub choices: Vec<(ChoiceHandle, String)>,
}

/// Callbacks for everything the quiz loop wants shown.
///
/// Implementations live in the presentation layer (console, TUI, ...).
/// Every method is called on the quiz loop's task and must not block.
pub trait QuizPresenter: Send + Sync {
    /// Called once before the first question
    fn on_start(&self, _total_questions: usize, _duration_secs: u32) {}

    /// Called when a question is dispatched
    fn on_question(&self, prompt: &QuestionPrompt);

    /// Called after every tick with the seconds left
    fn on_tick(&self, seconds_left: u32);

    /// Called when the current question changes answer state
    fn on_answer(&self, event: &AnswerEvent);

    /// Called once when the run finishes
    fn on_finished(&self, state: FinishState);

    /// Called when input matches neither a handle nor a choice
    fn on_unrecognized_input(&self, _input: &str) {}
}

/// No-op presenter for when nothing needs to be shown
pub struct NoPresenter;

impl QuizPresenter for NoPresenter {
    fn on_question(&self, _prompt: &QuestionPrompt) {}
    fn on_tick(&self, _seconds_left: u32) {}
    fn on_answer(&self, _event: &AnswerEvent) {}
    fn on_finished(&self, _state: FinishState) {}
}
