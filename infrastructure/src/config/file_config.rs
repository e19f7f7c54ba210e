//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! ([`SessionParams`]) and domain types ([`Question`]) on demand.

use quiz_application::SessionParams;
use quiz_domain::{Question, ScoringRules};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("quiz.duration_seconds cannot be 0")]
    ZeroDuration,

    #[error("quiz.tick_millis cannot be 0")]
    ZeroTick,

    #[error("question #{0} has an empty title")]
    EmptyTitle(usize),

    #[error("question #{0} has an empty answer")]
    EmptyAnswer(usize),

    #[error("question #{index} lists its answer '{answer}' among the choices")]
    AnswerInChoices { index: usize, answer: String },
}

/// Raw quiz settings from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Countdown length in seconds
    pub duration_seconds: u32,
    /// Points for each correct answer
    pub points_per_correct: u32,
    /// Seconds removed for each wrong answer
    pub wrong_answer_penalty_seconds: u32,
    /// Milliseconds between two one-second ticks
    pub tick_millis: u64,
    /// Milliseconds the answer feedback stays up
    pub reveal_delay_millis: u64,
    /// Shuffle question order on every run
    pub shuffle_questions: bool,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 75,
            points_per_correct: 1,
            wrong_answer_penalty_seconds: 5,
            tick_millis: 1000,
            reveal_delay_millis: 1200,
            shuffle_questions: true,
        }
    }
}

/// Raw leaderboard settings from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLeaderboardConfig {
    /// Path of the JSONL leaderboard file
    pub path: Option<String>,
    /// How many records to print
    pub max_entries_shown: usize,
}

impl Default for FileLeaderboardConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_entries_shown: 10,
        }
    }
}

impl FileLeaderboardConfig {
    /// Configured path, or `$XDG_DATA_HOME/code-quiz/leaderboard.jsonl`
    pub fn resolved_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => PathBuf::from(path),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("code-quiz")
                .join("leaderboard.jsonl"),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show the countdown progress bar
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
        }
    }
}

/// One question as written in TOML
///
/// ```toml
/// [[questions]]
/// title = "Which operator is used to represent AND statements?"
/// answer = "&&"
/// choices = ["||", "+", "&"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileQuestion {
    pub title: String,
    pub answer: String,
    #[serde(default)]
    pub choices: Vec<String>,
}

impl FileQuestion {
    pub fn to_question(&self) -> Question {
        Question::new(self.title.clone())
            .set_right_answer(self.answer.clone())
            .set_choices(self.choices.iter().cloned())
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz settings
    pub quiz: FileQuizConfig,
    /// Leaderboard settings
    pub leaderboard: FileLeaderboardConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Custom question bank (built-in bank when empty)
    pub questions: Vec<FileQuestion>,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.quiz.duration_seconds == 0 {
            return Err(ConfigValidationError::ZeroDuration);
        }
        if self.quiz.tick_millis == 0 {
            return Err(ConfigValidationError::ZeroTick);
        }

        for (i, question) in self.questions.iter().enumerate() {
            let index = i + 1;
            if question.title.trim().is_empty() {
                return Err(ConfigValidationError::EmptyTitle(index));
            }
            if question.answer.trim().is_empty() {
                return Err(ConfigValidationError::EmptyAnswer(index));
            }
            if question.choices.contains(&question.answer) {
                return Err(ConfigValidationError::AnswerInChoices {
                    index,
                    answer: question.answer.clone(),
                });
            }
        }

        Ok(())
    }

    /// Build session parameters from the `[quiz]` table
    pub fn session_params(&self) -> SessionParams {
        let quiz = &self.quiz;
        SessionParams::default()
            .with_duration_secs(quiz.duration_seconds)
            .with_tick_interval(Duration::from_millis(quiz.tick_millis))
            .with_reveal_delay(Duration::from_millis(quiz.reveal_delay_millis))
            .with_shuffle(quiz.shuffle_questions)
            .with_scoring(
                ScoringRules::default()
                    .with_points_per_correct(quiz.points_per_correct)
                    .with_wrong_answer_penalty(quiz.wrong_answer_penalty_seconds),
            )
    }
}
