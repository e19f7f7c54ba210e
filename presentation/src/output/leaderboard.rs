//! Leaderboard table formatting

use colored::Colorize;
use quiz_domain::{FinishState, Leaderboard};

pub struct LeaderboardFormatter;

impl LeaderboardFormatter {
    /// Ranked table of the top `limit` records.
    ///
    /// `highlight` is the 1-based rank of a freshly submitted record.
    pub fn format(leaderboard: &Leaderboard, limit: usize, highlight: Option<usize>) -> String {
        let mut output = format!("\n{}\n", "High Scores".cyan().bold());

        if leaderboard.is_empty() {
            output.push_str(&format!("{}\n", "No scores yet.".dimmed()));
            return output;
        }

        for (i, record) in leaderboard.top(limit).iter().enumerate() {
            let rank = i + 1;
            let status = match record.status() {
                FinishState::Completed => "completed".green(),
                FinishState::TimedOut => "timed out".yellow(),
            };
            let line = format!(
                "{:>3}. {:<16} {:>4}  {}",
                rank,
                record.author(),
                record.score(),
                status
            );
            if highlight == Some(rank) {
                output.push_str(&format!("{} {}\n", line.bold(), "<".cyan()));
            } else {
                output.push_str(&line);
                output.push('\n');
            }
        }

        let hidden = leaderboard.len().saturating_sub(limit);
        if hidden > 0 {
            output.push_str(&format!("{}\n", format!("... and {} more", hidden).dimmed()));
        }

        output
    }
}
