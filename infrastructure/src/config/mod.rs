//! Configuration file loading for code-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CODE_QUIZ_*` environment variables (`__` separates tables)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quiz.toml` or `./.quiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/code-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLeaderboardConfig, FileOutputConfig, FileQuestion,
    FileQuizConfig,
};
pub use loader::ConfigLoader;
