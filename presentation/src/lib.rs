//! Presentation layer for code-quiz
//!
//! This crate contains the CLI definition, console output formatters,
//! the countdown bar and terminal input adapters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use output::{console::ConsoleFormatter, leaderboard::LeaderboardFormatter};
pub use progress::reporter::CountdownBar;
pub use quiz::{ConsolePresenter, StdinAnswerSource, prompt_initials};
