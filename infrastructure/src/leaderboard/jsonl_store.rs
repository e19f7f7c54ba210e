//! JSONL file storage for leaderboard records.
//!
//! Every submitted score becomes a single JSON line with `author`, `score`,
//! `status` and a `timestamp`. Lines that fail to parse are skipped with a
//! warning so one corrupt entry never hides the rest of the board.

use chrono::{DateTime, Utc};
use quiz_application::{LeaderboardError, LeaderboardRepository};
use quiz_domain::{FinishState, Leaderboard, ScoreRecord};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// On-disk shape of one line.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    author: String,
    score: u32,
    status: FinishState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
}

/// Leaderboard repository backed by an append-only JSONL file.
///
/// The file (and its parent directory) is created on the first append;
/// a missing file loads as an empty board.
pub struct JsonlLeaderboardStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlLeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Get the path to the leaderboard file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // The guard protects no data, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LeaderboardRepository for JsonlLeaderboardStore {
    fn load(&self) -> Result<Leaderboard, LeaderboardError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No leaderboard at {} yet", self.path.display());
                return Ok(Leaderboard::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut leaderboard = Leaderboard::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let stored: StoredRecord = match serde_json::from_str(&line) {
                Ok(r) => r,
                Err(e) => {
                    warn!(
                        "Skipping malformed leaderboard line {} in {}: {}",
                        i + 1,
                        self.path.display(),
                        e
                    );
                    continue;
                }
            };

            match ScoreRecord::try_new(&stored.author, stored.score, stored.status) {
                Ok(record) => {
                    leaderboard.insert(record);
                }
                Err(e) => warn!("Skipping leaderboard line {}: {}", i + 1, e),
            }
        }

        Ok(leaderboard)
    }

    fn append(&self, record: &ScoreRecord) -> Result<(), LeaderboardError> {
        let stored = StoredRecord {
            author: record.author().to_string(),
            score: record.score(),
            status: record.status(),
            timestamp: Some(Utc::now()),
        };
        let line = serde_json::to_string(&stored)
            .map_err(|e| LeaderboardError::Serialization(e.to_string()))?;

        let _guard = self.lock();

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        file.flush()?;

        debug!(
            "Appended score for {} to {}",
            record.author(),
            self.path.display()
        );
        Ok(())
    }

    fn clear(&self) -> Result<(), LeaderboardError> {
        let _guard = self.lock();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(author: &str, score: u32, status: FinishState) -> ScoreRecord {
        ScoreRecord::try_new(author, score, status).unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlLeaderboardStore::new(dir.path().join("none.jsonl"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_writes_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("leaderboard.jsonl");
        let store = JsonlLeaderboardStore::new(&path);

        store.append(&record("AB", 2, FinishState::Completed)).unwrap();
        store.append(&record("CD", 5, FinishState::TimedOut)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["author"], "AB");
        assert_eq!(first["score"], 2);
        assert_eq!(first["status"], "completed");
        assert!(first.get("timestamp").is_some());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["status"], "timed_out");
    }

    #[test]
    fn test_load_ranks_highest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlLeaderboardStore::new(dir.path().join("lb.jsonl"));

        store.append(&record("LOW", 1, FinishState::Completed)).unwrap();
        store.append(&record("HIGH", 6, FinishState::TimedOut)).unwrap();
        store.append(&record("TIE", 1, FinishState::Completed)).unwrap();

        let board = store.load().unwrap();
        let authors: Vec<&str> = board.records().iter().map(|r| r.author()).collect();
        assert_eq!(authors, ["HIGH", "LOW", "TIE"]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lb.jsonl");
        std::fs::write(
            &path,
            concat!(
                "{\"author\":\"OK\",\"score\":3,\"status\":\"completed\"}\n",
                "not json\n",
                "\n",
                "{\"author\":\"  \",\"score\":9,\"status\":\"completed\"}\n",
                "{\"author\":\"ZZ\",\"score\":1,\"status\":\"timed_out\",\"timestamp\":\"2024-05-01T10:00:00Z\"}\n",
            ),
        )
        .unwrap();

        let board = JsonlLeaderboardStore::new(&path).load().unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.best().unwrap().author(), "OK");
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lb.jsonl");
        let store = JsonlLeaderboardStore::new(&path);

        store.append(&record("AB", 2, FinishState::Completed)).unwrap();
        store.clear().unwrap();
        assert!(!path.exists());
        assert!(store.load().unwrap().is_empty());

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_poisoned_write_lock_still_appends() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(JsonlLeaderboardStore::new(dir.path().join("lb.jsonl")));

        let poisoner = std::sync::Arc::clone(&store);
        let result = std::thread::spawn(move || {
            let _guard = poisoner.write_lock.lock().unwrap();
            panic!("writer crashed");
        })
        .join();
        assert!(result.is_err());
        assert!(store.write_lock.is_poisoned());

        store.append(&record("AB", 2, FinishState::Completed)).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
        store.clear().unwrap();
    }
}
