//! Infrastructure layer for code-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration file loading, the question
//! bank and JSONL leaderboard storage.

pub mod config;
pub mod leaderboard;
pub mod questions;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLeaderboardConfig, FileOutputConfig,
    FileQuestion, FileQuizConfig,
};
pub use leaderboard::JsonlLeaderboardStore;
pub use questions::{BankSource, QuestionBank};
