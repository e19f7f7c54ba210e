//! Countdown display for quiz runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Countdown bar that drains as the clock runs down
///
/// Lines printed through [`CountdownBar::println`] appear above the bar
/// without tearing it. A hidden bar prints straight to stdout.
pub struct CountdownBar {
    bar: ProgressBar,
}

impl CountdownBar {
    pub fn new(duration_secs: u32) -> Self {
        let bar = ProgressBar::new(u64::from(duration_secs));
        bar.set_style(Self::style());
        bar.set_prefix("Time");
        bar.set_position(u64::from(duration_secs));
        Self { bar }
    }

    /// A bar that never draws (for `--quiet` or non-interactive runs)
    pub fn hidden(duration_secs: u32) -> Self {
        let countdown = Self::new(duration_secs);
        countdown.bar.set_draw_target(ProgressDrawTarget::hidden());
        countdown
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:30.green/red}] {pos:>3}s {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
    }

    pub fn set_left(&self, seconds_left: u32) {
        self.bar.set_position(u64::from(seconds_left));
        if seconds_left <= 10 {
            self.bar.set_message(format!("{}", "hurry!".red()));
        }
    }

    /// Remove `seconds` right away, ahead of the next tick
    pub fn penalize(&self, seconds: u32) {
        let left = self.bar.position().saturating_sub(u64::from(seconds));
        self.set_left(u32::try_from(left).unwrap_or(u32::MAX));
    }

    pub fn seconds_left(&self) -> u64 {
        self.bar.position()
    }

    pub fn println(&self, line: impl AsRef<str>) {
        if self.bar.is_hidden() {
            println!("{}", line.as_ref());
        } else {
            self.bar.println(line.as_ref());
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
