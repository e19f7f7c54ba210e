//! Submit Score use case
//!
//! Turns a finished run plus the player's initials into a leaderboard entry.

use crate::ports::leaderboard::{LeaderboardError, LeaderboardRepository};
use quiz_domain::{FinishState, Leaderboard, QuizOutcome, ScoreRecord, ScoreRecordError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while submitting a score
#[derive(Error, Debug)]
pub enum SubmitScoreError {
    #[error("Only finished runs can be submitted")]
    NotFinished,

    #[error(transparent)]
    InvalidRecord(#[from] ScoreRecordError),

    #[error("Leaderboard storage error: {0}")]
    Storage(#[from] LeaderboardError),
}

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct SubmitScoreOutput {
    pub record: ScoreRecord,
    /// 1-based position of the new record
    pub rank: usize,
    pub leaderboard: Leaderboard,
}

/// Use case for saving a score to the leaderboard
pub struct SubmitScoreUseCase<R: LeaderboardRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LeaderboardRepository + ?Sized> SubmitScoreUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate `author`, store the record and return the updated ranking.
    pub fn execute(
        &self,
        author: &str,
        outcome: &QuizOutcome,
    ) -> Result<SubmitScoreOutput, SubmitScoreError> {
        let status = outcome.finish_state.ok_or(SubmitScoreError::NotFinished)?;
        self.submit(author, outcome.score, status)
    }

    /// Store a raw score/status pair.
    pub fn submit(
        &self,
        author: &str,
        score: u32,
        status: FinishState,
    ) -> Result<SubmitScoreOutput, SubmitScoreError> {
        let record = ScoreRecord::try_new(author, score, status)?;

        let mut leaderboard = self.repository.load()?;
        self.repository.append(&record)?;
        let rank = leaderboard.insert(record.clone());

        info!(
            "Saved score {} for {} (rank {} of {})",
            record.score(),
            record.author(),
            rank,
            leaderboard.len()
        );

        Ok(SubmitScoreOutput {
            record,
            rank,
            leaderboard,
        })
    }
}
