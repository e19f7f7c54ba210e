//! Leaderboard storage port
//!
//! The quiz core only supplies a score and a finish state; where records
//! live is up to the adapter (a JSONL file in the infrastructure layer).

use quiz_domain::{Leaderboard, ScoreRecord};
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur while reading or writing the leaderboard
#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Leaderboard lock poisoned")]
    Poisoned,
}

/// Port for persisting score records.
pub trait LeaderboardRepository: Send + Sync {
    /// Read every stored record, ranked.
    fn load(&self) -> Result<Leaderboard, LeaderboardError>;

    /// Store one more record.
    fn append(&self, record: &ScoreRecord) -> Result<(), LeaderboardError>;

    /// Remove every stored record.
    fn clear(&self) -> Result<(), LeaderboardError>;
}

/// Volatile repository for tests and `--no-save` style runs.
#[derive(Default)]
pub struct InMemoryLeaderboard {
    records: Mutex<Vec<ScoreRecord>>,
}

impl InMemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaderboardRepository for InMemoryLeaderboard {
    fn load(&self) -> Result<Leaderboard, LeaderboardError> {
        let records = self
            .records
            .lock()
            .map_err(|_| LeaderboardError::Poisoned)?;
        Ok(records.iter().cloned().collect())
    }

    fn append(&self, record: &ScoreRecord) -> Result<(), LeaderboardError> {
        self.records
            .lock()
            .map_err(|_| LeaderboardError::Poisoned)?
            .push(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), LeaderboardError> {
        self.records
            .lock()
            .map_err(|_| LeaderboardError::Poisoned)?
            .clear();
        Ok(())
    }
}
