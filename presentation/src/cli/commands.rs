//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for code-quiz
#[derive(Parser, Debug)]
#[command(name = "code-quiz")]
#[command(author, version, about = "Timed multiple-choice coding quiz")]
#[command(long_about = r#"
Code Quiz asks a series of multiple-choice questions against the clock.

Type the number next to a choice (or the choice itself) and press Enter.
A correct answer scores a point; a wrong one costs seconds off the clock.
The run ends when every question is answered or the timer reaches zero,
then you can save your initials to the leaderboard.

Configuration files are loaded from (in priority order):
1. CODE_QUIZ_* environment variables
2. --config <path>     Explicit config file
3. ./quiz.toml         Project-level config
4. ~/.config/code-quiz/config.toml   Global config

Example:
  code-quiz
  code-quiz --duration 30 --no-shuffle
  code-quiz --leaderboard
"#)]
pub struct Cli {
    /// Countdown length in seconds (overrides config)
    #[arg(short, long, value_name = "SECONDS")]
    pub duration: Option<u32>,

    /// Keep questions in bank order
    #[arg(long)]
    pub no_shuffle: bool,

    /// Save the score under these initials without prompting
    #[arg(long, value_name = "INITIALS")]
    pub initials: Option<String>,

    /// Show the leaderboard and exit
    #[arg(long)]
    pub leaderboard: bool,

    /// Delete every leaderboard entry and exit
    #[arg(long, conflicts_with = "leaderboard")]
    pub clear_leaderboard: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the countdown bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
