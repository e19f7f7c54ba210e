//! Quiz engine
//!
//! [`QuizEngine`] owns the question list, the score and the countdown, and
//! is the only place where answers are scored. It is a synchronous state
//! machine: a driver calls [`QuizEngine::tick`] once per tick interval and
//! forwards user answers through [`QuizEngine::answer_current`].
//!
//! ```text
//! Idle ──start_timer──▶ Running ──last question passed──▶ Finished(Completed)
//!                          │
//!                          └──────time reaches zero─────▶ Finished(TimedOut)
//! ```

use super::timer::Timer;
use super::value_objects::{FinishState, QuizOutcome, RunState, ScoringRules};
use crate::core::error::QuizError;
use crate::notify::Notifier;
use crate::question::{AnswerEvent, AnswerState, ChoiceHandle, Question};
use rand::Rng;
use rand::seq::SliceRandom;

/// Orchestrator for one quiz run.
#[derive(Debug, Default)]
pub struct QuizEngine {
    questions: Vec<Question>,
    /// 1-based index of the dispatched question; 0 before the first dispatch
    current_index: usize,
    score: u32,
    answered: usize,
    correct: usize,
    rules: ScoringRules,
    timer: Timer,
    state: RunState,
    ticks: Notifier<u32>,
    finished: Notifier<FinishState>,
}

impl QuizEngine {
    /// Slot that receives the seconds left after every tick
    pub const TICK: &'static str = "tick";
    /// Slot that receives the finish state, exactly once per run
    pub const QUIZ_FINISHED: &'static str = "quiz_finished";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ScoringRules) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    // ==================== Authoring ====================

    /// Append a question. Ordering is only guaranteed for questions added before the run starts.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Uniformly shuffle the questions that have not been dispatched yet.
    ///
    /// Before the first dispatch this is the whole list. No-op once finished.
    pub fn randomize_questions(&mut self) {
        self.randomize_questions_with(&mut rand::thread_rng());
    }

    pub fn randomize_questions_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.state.is_finished() {
            return;
        }
        let start = self.current_index.min(self.questions.len());
        self.questions[start..].shuffle(rng);
    }

    /// Connect `callback` to the answer notifications of every question added so far.
    pub fn connect_answers<F>(&mut self, name: &str, callback: F)
    where
        F: FnMut(&AnswerEvent) + Clone + Send + 'static,
    {
        for question in &mut self.questions {
            question.connect(name, callback.clone());
        }
    }

    // ==================== Timer ====================

    /// Set the countdown length. Only applies before the timer starts.
    pub fn set_duration(&mut self, seconds: u32) {
        if self.state == RunState::Idle {
            self.timer.set_duration(seconds);
        }
    }

    pub fn duration(&self) -> u32 {
        self.timer.duration()
    }

    /// Start the countdown (`Idle → Running`).
    ///
    /// `on_tick` receives the seconds left after every tick. Returns `false`
    /// when the engine was not idle; the callback is then dropped.
    pub fn start_timer<F>(&mut self, on_tick: F) -> bool
    where
        F: FnMut(&u32) + Send + 'static,
    {
        if self.state != RunState::Idle {
            return false;
        }

        self.ticks.connect(Self::TICK, on_tick);
        self.timer.start();
        self.state = RunState::Running;

        if self.timer.is_exhausted() {
            self.finish(FinishState::TimedOut);
        }
        true
    }

    /// Advance the countdown by one second.
    ///
    /// Emits the tick, then finishes the run if time is up. Returns the
    /// seconds left, or `None` when the engine is not running.
    pub fn tick(&mut self) -> Option<u32> {
        if self.state != RunState::Running {
            return None;
        }

        let left = self.timer.tick()?;
        self.ticks.emit(Self::TICK, &left);

        if left == 0 {
            self.finish(FinishState::TimedOut);
        }
        Some(left)
    }

    /// Take `seconds` off the clock, clamped at zero.
    ///
    /// Reaching zero finishes the run. `None` when the engine is not running.
    pub fn subtract_time(&mut self, seconds: u32) -> Option<u32> {
        if self.state != RunState::Running {
            return None;
        }

        let left = self.timer.subtract(seconds)?;
        if left == 0 {
            self.finish(FinishState::TimedOut);
        }
        Some(left)
    }

    pub fn time_left(&self) -> u32 {
        self.timer.time_left()
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    // ==================== Questions ====================

    /// Dispatch the next question.
    ///
    /// Passing the last question finishes the run as
    /// [`FinishState::Completed`] and returns `None`. Once finished, further
    /// calls change nothing.
    pub fn next_question(&mut self) -> Option<&Question> {
        if self.state.is_finished() {
            return None;
        }

        self.current_index += 1;
        if self.current_index > self.questions.len() {
            self.finish(FinishState::Completed);
            return None;
        }
        self.questions.get(self.current_index - 1)
    }

    /// The dispatched question, without advancing.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        let index = self.checked_index()?;
        Ok(&self.questions[index])
    }

    /// 1-based position of the dispatched question (0 before the first dispatch)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Record which rendered handle shows `choice` on the current question.
    pub fn bind_choice(
        &mut self,
        handle: impl Into<ChoiceHandle>,
        choice: impl Into<String>,
    ) -> Result<(), QuizError> {
        let index = self.checked_index()?;
        self.questions[index].set_button_for_choice(handle, choice);
        Ok(())
    }

    /// Resolve a rendered handle on the current question.
    pub fn resolve_choice(&self, handle: &ChoiceHandle) -> Result<Option<&str>, QuizError> {
        Ok(self.current_question()?.choice_for(handle))
    }

    /// Answer the current question and apply scoring.
    ///
    /// A correct answer adds [`ScoringRules::points_per_correct`]; a wrong
    /// one takes [`ScoringRules::wrong_answer_penalty_secs`] off the clock.
    /// Returns `Ok(None)` when the question was already answered or the run
    /// has finished.
    pub fn answer_current(&mut self, choice: &str) -> Result<Option<AnswerState>, QuizError> {
        let index = self.checked_index()?;
        if self.state.is_finished() {
            return Ok(None);
        }

        let outcome = self.questions[index].answer(choice);
        match outcome {
            Some(AnswerState::Correct) => {
                self.answered += 1;
                self.correct += 1;
                self.score += self.rules.points_per_correct;
            }
            Some(AnswerState::Incorrect) => {
                self.answered += 1;
                self.subtract_time(self.rules.wrong_answer_penalty_secs);
            }
            Some(AnswerState::Unanswered) | None => {}
        }
        Ok(outcome)
    }

    fn checked_index(&self) -> Result<usize, QuizError> {
        match self.current_index {
            0 => Err(QuizError::NotStarted),
            i if i > self.questions.len() => Err(QuizError::OutOfRange {
                index: i,
                count: self.questions.len(),
            }),
            i => Ok(i - 1),
        }
    }

    // ==================== Run state ====================

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn finish_state(&self) -> Option<FinishState> {
        self.state.finish_state()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn outcome(&self) -> QuizOutcome {
        QuizOutcome {
            score: self.score,
            finish_state: self.finish_state(),
            answered: self.answered,
            correct: self.correct,
            total_questions: self.questions.len(),
            time_left: self.timer.time_left(),
        }
    }

    /// Subscribe to a notification slot of the engine.
    pub fn connect<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: FnMut(&FinishState) + Send + 'static,
    {
        self.finished.connect(name, callback);
    }

    pub fn disconnect(&mut self, name: &str) {
        self.finished.disconnect(name);
    }

    /// Shorthand for connecting to [`QuizEngine::QUIZ_FINISHED`].
    pub fn on_finished<F>(&mut self, callback: F)
    where
        F: FnMut(&FinishState) + Send + 'static,
    {
        self.connect(Self::QUIZ_FINISHED, callback);
    }

    /// Enter `Finished`. First caller wins; later calls return `false`.
    fn finish(&mut self, state: FinishState) -> bool {
        if self.state.is_finished() {
            return false;
        }

        self.timer.stop();
        self.state = RunState::Finished(state);
        self.finished.emit(Self::QUIZ_FINISHED, &state);
        true
    }
}
