//! Session parameters for the quiz loop.
//!
//! [`SessionParams`] groups the settings that control how
//! [`RunQuizUseCase`](crate::use_cases::run_quiz::RunQuizUseCase) drives a
//! quiz engine: countdown length, tick pacing, reveal delay and scoring.

use quiz_domain::{Question, QuizEngine, ScoringRules};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Quiz loop control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionParams {
    /// Countdown length in seconds.
    pub duration_secs: u32,
    /// Wall-clock time between two one-second ticks.
    pub tick_interval: Duration,
    /// How long answer feedback stays up before the next question.
    pub reveal_delay: Duration,
    /// Shuffle the question order before the run starts.
    pub shuffle_questions: bool,
    /// Points and penalties applied by the engine.
    pub scoring: ScoringRules,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            duration_secs: 75,
            tick_interval: Duration::from_secs(1),
            reveal_delay: Duration::from_millis(1200),
            shuffle_questions: true,
            scoring: ScoringRules::default(),
        }
    }
}

impl SessionParams {
    // ==================== Builder Methods ====================

    pub fn with_duration_secs(mut self, seconds: u32) -> Self {
        self.duration_secs = seconds;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle_questions = shuffle;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    /// Build an idle engine loaded with `questions` and these scoring rules.
    pub fn new_engine(&self, questions: impl IntoIterator<Item = Question>) -> QuizEngine {
        let mut engine = QuizEngine::with_rules(self.scoring);
        for question in questions {
            engine.add_question(question);
        }
        engine.set_duration(self.duration_secs);
        engine
    }
}
