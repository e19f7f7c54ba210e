//! Application layer for code-quiz
//!
//! This crate contains use cases, port definitions, and session configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    answer_source::{AnswerSource, ChannelAnswerSource},
    leaderboard::{InMemoryLeaderboard, LeaderboardError, LeaderboardRepository},
    quiz_presenter::{NoPresenter, QuestionPrompt, QuizPresenter},
};
pub use use_cases::run_quiz::{RunQuizError, RunQuizUseCase};
pub use use_cases::submit_score::{SubmitScoreError, SubmitScoreOutput, SubmitScoreUseCase};
