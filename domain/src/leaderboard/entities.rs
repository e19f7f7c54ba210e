//! Leaderboard entities

use crate::quiz::FinishState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a score record cannot be created
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreRecordError {
    #[error("Initials cannot be empty")]
    EmptyAuthor,

    #[error("Initials are too long ({len} characters, at most {max} allowed)")]
    AuthorTooLong { len: usize, max: usize },
}

/// One submitted score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    author: String,
    score: u32,
    status: FinishState,
}

impl ScoreRecord {
    pub const MAX_AUTHOR_LEN: usize = 16;

    /// Create a record; the author is trimmed and must be non-empty.
    pub fn try_new(
        author: impl AsRef<str>,
        score: u32,
        status: FinishState,
    ) -> Result<Self, ScoreRecordError> {
        let author = author.as_ref().trim();
        if author.is_empty() {
            return Err(ScoreRecordError::EmptyAuthor);
        }
        let len = author.chars().count();
        if len > Self::MAX_AUTHOR_LEN {
            return Err(ScoreRecordError::AuthorTooLong {
                len,
                max: Self::MAX_AUTHOR_LEN,
            });
        }

        Ok(Self {
            author: author.to_string(),
            score,
            status,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> FinishState {
        self.status
    }
}

/// Score records ordered from highest to lowest score.
///
/// Equal scores keep submission order, so an earlier record outranks a
/// later one with the same score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record and return its 1-based rank.
    pub fn insert(&mut self, record: ScoreRecord) -> usize {
        let position = self
            .records
            .iter()
            .position(|existing| existing.score < record.score)
            .unwrap_or(self.records.len());
        self.records.insert(position, record);
        position + 1
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// The best `n` records
    pub fn top(&self, n: usize) -> &[ScoreRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn best(&self) -> Option<&ScoreRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ScoreRecord> for Leaderboard {
    fn from_iter<I: IntoIterator<Item = ScoreRecord>>(iter: I) -> Self {
        let mut board = Leaderboard::new();
        for record in iter {
            board.insert(record);
        }
        board
    }
}
