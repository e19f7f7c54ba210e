//! Leaderboard value types.
//!
//! Storage lives behind the `LeaderboardRepository` port in the application
//! layer; this module only knows how records are validated and ranked.

pub mod entities;

pub use entities::{Leaderboard, ScoreRecord, ScoreRecordError};
