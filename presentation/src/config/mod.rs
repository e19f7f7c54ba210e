//! Presentation-level configuration
//!
//! Configuration for console output.

use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show the countdown progress bar
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Apply `--no-color` / `--quiet` style overrides
    pub fn with_overrides(mut self, no_color: bool, quiet: bool) -> Self {
        if no_color {
            self.color = false;
        }
        if quiet {
            self.show_progress = false;
        }
        self
    }

    /// Switch terminal colors off process-wide when disabled
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
