//! Run Quiz use case
//!
//! Drives a [`QuizEngine`] from start to finish on a single task.
//!
//! ```text
//!             ┌─────────── tick interval ──────────┐
//!             │                                    ▼
//! start ──▶ select! ◀── answer input ──▶ engine.answer_current
//!             │                                    │
//!             └──── reveal delay elapsed ◀─────────┘
//!                          │
//!                          ▼
//!                 engine.next_question
//! ```
//!
//! Every branch runs to completion before the next one is polled, so a
//! tick and an answer never interleave. The ticker token is cancelled
//! exactly once, when the engine enters `Finished`.

use crate::config::SessionParams;
use crate::ports::answer_source::AnswerSource;
use crate::ports::quiz_presenter::{QuestionPrompt, QuizPresenter};
use quiz_domain::{AnswerEvent, ChoiceHandle, FinishState, Question, QuizEngine, QuizOutcome};
use std::sync::Arc;
use thiserror::Error;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while running a quiz
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunQuizError {
    #[error("The quiz has no questions")]
    NoQuestions,

    #[error("Answer input closed before the quiz finished")]
    InputClosed,

    #[error("Quiz cancelled")]
    Cancelled,

    #[error("Tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Use case for running one timed quiz
pub struct RunQuizUseCase {
    presenter: Arc<dyn QuizPresenter>,
    params: SessionParams,
    shutdown: CancellationToken,
}

impl RunQuizUseCase {
    pub fn new(presenter: Arc<dyn QuizPresenter>, params: SessionParams) -> Self {
        Self {
            presenter,
            params,
            shutdown: CancellationToken::new(),
        }
    }

    /// Abort the run when `token` is cancelled (e.g. on Ctrl+C).
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    /// Run `engine` until it finishes.
    ///
    /// The engine must be idle. Duration and shuffling are applied from
    /// [`SessionParams`] before the timer starts.
    pub async fn execute(
        &self,
        mut engine: QuizEngine,
        answers: &mut dyn AnswerSource,
    ) -> Result<QuizOutcome, RunQuizError> {
        if engine.question_count() == 0 {
            return Err(RunQuizError::NoQuestions);
        }
        if self.params.tick_interval.is_zero() {
            return Err(RunQuizError::ZeroTickInterval);
        }

        engine.set_duration(self.params.duration_secs);
        if self.params.shuffle_questions {
            engine.randomize_questions();
        }
        self.wire_notifications(&mut engine);

        info!(
            "Starting quiz with {} questions ({}s on the clock)",
            engine.question_count(),
            engine.duration()
        );
        self.presenter
            .on_start(engine.question_count(), engine.duration());

        let presenter = Arc::clone(&self.presenter);
        engine.start_timer(move |left: &u32| presenter.on_tick(*left));

        let ticker = self.shutdown.child_token();
        let tick_every = self.params.tick_interval;
        let mut interval = time::interval_at(Instant::now() + tick_every, tick_every);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut reveal_at: Option<Instant> = None;
        let mut input_open = true;

        self.dispatch_next(&mut engine);
        Self::stop_if_finished(&engine, &ticker);

        while !ticker.is_cancelled() {
            tokio::select! {
                biased;

                _ = ticker.cancelled() => {}

                _ = interval.tick() => {
                    if let Some(left) = engine.tick() {
                        debug!("Tick: {}s left", left);
                    }
                }

                _ = time::sleep_until(reveal_at.unwrap_or_else(Instant::now)), if reveal_at.is_some() => {
                    reveal_at = None;
                    self.dispatch_next(&mut engine);
                }

                input = answers.next_answer(), if input_open => {
                    match input {
                        Some(line) => {
                            if self.handle_input(&mut engine, &line) {
                                reveal_at = Some(Instant::now() + self.params.reveal_delay);
                            }
                        }
                        None => {
                            debug!("Answer input closed");
                            input_open = false;
                        }
                    }
                }
            }

            Self::stop_if_finished(&engine, &ticker);

            // A pending reveal can still complete the run; otherwise the
            // current question waits for input that will never come.
            if !input_open && reveal_at.is_none() && !engine.is_finished() {
                warn!("Answer input closed with {}s left", engine.time_left());
                ticker.cancel();
                return Err(RunQuizError::InputClosed);
            }
        }

        if !engine.is_finished() {
            info!("Quiz cancelled before finishing");
            return Err(RunQuizError::Cancelled);
        }

        let outcome = engine.outcome();
        info!(
            "Quiz finished ({}): score {}, {}/{} correct, {}s left",
            outcome
                .finish_state
                .map(|s| s.to_string())
                .unwrap_or_default(),
            outcome.score,
            outcome.correct,
            outcome.total_questions,
            outcome.time_left
        );
        Ok(outcome)
    }

    /// Forward answer and finish notifications to the presenter.
    fn wire_notifications(&self, engine: &mut QuizEngine) {
        let presenter = Arc::clone(&self.presenter);
        engine.connect_answers(Question::ANSWER_CHANGED, move |event: &AnswerEvent| {
            presenter.on_answer(event)
        });

        let presenter = Arc::clone(&self.presenter);
        engine.on_finished(move |state: &FinishState| presenter.on_finished(*state));
    }

    fn stop_if_finished(engine: &QuizEngine, ticker: &CancellationToken) {
        if engine.is_finished() && !ticker.is_cancelled() {
            debug!("Engine finished, stopping ticker");
            ticker.cancel();
        }
    }

    /// Dispatch the next question and render it with numbered handles.
    fn dispatch_next(&self, engine: &mut QuizEngine) {
        let Some(question) = engine.next_question() else {
            return;
        };
        let title = question.title().to_string();
        let choices = question.random_choices();

        let mut rendered = Vec::with_capacity(choices.len());
        for (i, choice) in choices.into_iter().enumerate() {
            let handle = ChoiceHandle::new((i + 1).to_string());
            if let Err(e) = engine.bind_choice(handle.clone(), choice.clone()) {
                warn!("Could not bind choice '{}': {}", choice, e);
            }
            rendered.push((handle, choice));
        }

        let prompt = QuestionPrompt {
            number: engine.current_index(),
            total: engine.question_count(),
            title,
            choices: rendered,
        };
        debug!("Dispatching question {}/{}", prompt.number, prompt.total);
        self.presenter.on_question(&prompt);
    }

    /// Resolve one line of input and answer the current question.
    ///
    /// Returns `true` when the line answered the question.
    fn handle_input(&self, engine: &mut QuizEngine, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }

        let Some(choice) = Self::resolve_input(engine, line) else {
            self.presenter.on_unrecognized_input(line);
            return false;
        };

        match engine.answer_current(&choice) {
            Ok(Some(state)) => {
                debug!("Answered '{}': {}", choice, state);
                true
            }
            Ok(None) => {
                debug!("Ignoring '{}': question already answered", choice);
                false
            }
            Err(e) if e.is_not_started() => {
                debug!("Ignoring '{}': no question dispatched yet", choice);
                false
            }
            Err(e) => {
                warn!("Cannot answer: {}", e);
                false
            }
        }
    }

    /// A handle resolves through the question's handle map; otherwise the
    /// exact text of a choice is accepted.
    fn resolve_input(engine: &QuizEngine, line: &str) -> Option<String> {
        if let Ok(Some(choice)) = engine.resolve_choice(&ChoiceHandle::new(line)) {
            return Some(choice.to_string());
        }

        let question = engine.current_question().ok()?;
        if question.right_answer() == line || question.choices().iter().any(|c| c == line) {
            Some(line.to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::answer_source::ChannelAnswerSource;
    use crate::ports::quiz_presenter::NoPresenter;
    use quiz_domain::AnswerState;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Seen {
        Start(usize, u32),
        Question(usize, String),
        Tick(u32),
        Answer(String, AnswerState),
        Finished(FinishState),
        Unrecognized(String),
    }

    /// Records every callback and sends the right answer on each question
    /// when `auto` is set.
    struct RecordingPresenter {
        seen: Mutex<Vec<Seen>>,
        prompts: Mutex<Vec<QuestionPrompt>>,
        auto: Option<mpsc::UnboundedSender<String>>,
        answer_with: fn(&QuestionPrompt) -> Option<String>,
    }

    impl RecordingPresenter {
        fn passive() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                prompts: Mutex::new(Vec::new()),
                auto: None,
                answer_with: |_| None,
            }
        }

        fn answering(
            tx: mpsc::UnboundedSender<String>,
            answer_with: fn(&QuestionPrompt) -> Option<String>,
        ) -> Self {
            Self {
                auto: Some(tx),
                answer_with,
                ..Self::passive()
            }
        }

        fn seen(&self) -> Vec<Seen> {
            self.seen.lock().unwrap().clone()
        }

        fn ticks(&self) -> Vec<u32> {
            self.seen()
                .into_iter()
                .filter_map(|s| match s {
                    Seen::Tick(t) => Some(t),
                    _ => None,
                })
                .collect()
        }

        fn finishes(&self) -> Vec<FinishState> {
            self.seen()
                .into_iter()
                .filter_map(|s| match s {
                    Seen::Finished(f) => Some(f),
                    _ => None,
                })
                .collect()
        }
    }

    impl QuizPresenter for RecordingPresenter {
        fn on_start(&self, total: usize, duration: u32) {
            self.seen.lock().unwrap().push(Seen::Start(total, duration));
        }

        fn on_question(&self, prompt: &QuestionPrompt) {
            self.seen
                .lock()
                .unwrap()
                .push(Seen::Question(prompt.number, prompt.title.clone()));
            self.prompts.lock().unwrap().push(prompt.clone());
            if let (Some(tx), Some(answer)) = (&self.auto, (self.answer_with)(prompt)) {
                tx.send(answer).unwrap();
            }
        }

        fn on_tick(&self, seconds_left: u32) {
            self.seen.lock().unwrap().push(Seen::Tick(seconds_left));
        }

        fn on_answer(&self, event: &AnswerEvent) {
            self.seen
                .lock()
                .unwrap()
                .push(Seen::Answer(event.choice.clone(), event.state));
        }

        fn on_finished(&self, state: FinishState) {
            self.seen.lock().unwrap().push(Seen::Finished(state));
        }

        fn on_unrecognized_input(&self, input: &str) {
            self.seen
                .lock()
                .unwrap()
                .push(Seen::Unrecognized(input.to_string()));
        }
    }

    fn questions() -> Vec<Question> {
        vec![
            Question::new("Q1").set_right_answer("A1").set_choices(["B1", "C1"]),
            Question::new("Q2").set_right_answer("A2").set_choices(["B2"]),
        ]
    }

    fn params() -> SessionParams {
        SessionParams::default()
            .with_duration_secs(60)
            .with_shuffle(false)
            .with_reveal_delay(Duration::from_millis(500))
    }

    /// Pick the handle showing the right answer (text starts with 'A')
    fn right_handle(prompt: &QuestionPrompt) -> Option<String> {
        prompt
            .choices
            .iter()
            .find(|(_, text)| text.starts_with('A'))
            .map(|(handle, _)| handle.to_string())
    }

    /// Right on the first question, wrong on every other one
    fn right_then_wrong(prompt: &QuestionPrompt) -> Option<String> {
        if prompt.number == 1 {
            right_handle(prompt)
        } else {
            Some(format!("B{}", prompt.number))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_completes_with_all_right_answers() {
        let (tx, mut source) = ChannelAnswerSource::channel();
        let presenter = Arc::new(RecordingPresenter::answering(tx, right_handle));
        let use_case = RunQuizUseCase::new(presenter.clone(), params());

        let engine = use_case.params().new_engine(questions());
        let outcome = use_case.execute(engine, &mut source).await.unwrap();

        assert_eq!(outcome.finish_state, Some(FinishState::Completed));
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.correct, 2);
        assert_eq!(presenter.finishes(), vec![FinishState::Completed]);

        let seen = presenter.seen();
        assert_eq!(seen[0], Seen::Start(2, 60));
        assert_eq!(seen[1], Seen::Question(1, "Q1".to_string()));
        assert!(seen.contains(&Seen::Answer("A1".to_string(), AnswerState::Correct)));
        assert!(seen.contains(&Seen::Question(2, "Q2".to_string())));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_answer_costs_five_seconds() {
        let (tx, mut source) = ChannelAnswerSource::channel();
        let presenter = Arc::new(RecordingPresenter::answering(tx, right_then_wrong));
        let use_case = RunQuizUseCase::new(
            presenter.clone(),
            params().with_reveal_delay(Duration::from_millis(200)),
        );

        let engine = use_case.params().new_engine(questions());
        let outcome = use_case.execute(engine, &mut source).await.unwrap();

        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.answered, 2);
        assert!(
            presenter
                .seen()
                .contains(&Seen::Answer("B2".to_string(), AnswerState::Incorrect))
        );
        // Both reveal delays fit inside the first tick
        assert!(presenter.ticks().is_empty());
        assert_eq!(outcome.time_left, 55);
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_on_ticks_alone() {
        let (_tx, mut source) = ChannelAnswerSource::channel();
        let presenter = Arc::new(RecordingPresenter::passive());
        let use_case =
            RunQuizUseCase::new(presenter.clone(), params().with_duration_secs(3));

        let engine = use_case.params().new_engine(questions());
        let outcome = use_case.execute(engine, &mut source).await.unwrap();

        assert_eq!(outcome.finish_state, Some(FinishState::TimedOut));
        assert_eq!(outcome.time_left, 0);
        assert_eq!(presenter.ticks(), vec![2, 1, 0]);
        assert_eq!(presenter.finishes(), vec![FinishState::TimedOut]);

        // No stray ticks once the run has finished
        time::advance(Duration::from_secs(5)).await;
        assert_eq!(presenter.ticks(), vec![2, 1, 0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_input_answers_once() {
        let (tx, mut source) = ChannelAnswerSource::channel();
        let presenter = Arc::new(RecordingPresenter::passive());
        let use_case = RunQuizUseCase::new(presenter.clone(), params().with_duration_secs(2));

        tx.send("B1".to_string()).unwrap();
        tx.send("A1".to_string()).unwrap();
        tx.send("B1".to_string()).unwrap();

        let engine = use_case.params().new_engine(questions());
        let outcome = use_case.execute(engine, &mut source).await.unwrap();

        let answers: Vec<_> = presenter
            .seen()
            .into_iter()
            .filter(|s| matches!(s, Seen::Answer(..)))
            .collect();
        assert_eq!(
            answers,
            vec![Seen::Answer("B1".to_string(), AnswerState::Incorrect)]
        );
        assert_eq!(outcome.score, 0);
        // The 5s penalty exceeds the 2s clock
        assert_eq!(outcome.finish_state, Some(FinishState::TimedOut));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unrecognized_input_is_reported() {
        let (tx, mut source) = ChannelAnswerSource::channel();
        let presenter = Arc::new(RecordingPresenter::passive());
        let use_case = RunQuizUseCase::new(presenter.clone(), params().with_duration_secs(1));

        tx.send("banana".to_string()).unwrap();
        tx.send("   ".to_string()).unwrap();

        let engine = use_case.params().new_engine(questions());
        use_case.execute(engine, &mut source).await.unwrap();

        let seen = presenter.seen();
        assert!(seen.contains(&Seen::Unrecognized("banana".to_string())));
        assert!(!seen.iter().any(|s| matches!(s, Seen::Answer(..))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_handles_are_numbered_from_one() {
        let (_tx, mut source) = ChannelAnswerSource::channel();
        let presenter = Arc::new(RecordingPresenter::passive());
        let use_case = RunQuizUseCase::new(presenter.clone(), params().with_duration_secs(1));

        let engine = use_case.params().new_engine(questions());
        use_case.execute(engine, &mut source).await.unwrap();

        let prompts = presenter.prompts.lock().unwrap();
        let handles: Vec<String> = prompts[0]
            .choices
            .iter()
            .map(|(h, _)| h.to_string())
            .collect();
        assert_eq!(handles, vec!["1", "2", "3"]);
        let mut texts: Vec<&str> = prompts[0].choices.iter().map(|(_, t)| t.as_str()).collect();
        texts.sort_unstable();
        assert_eq!(texts, vec!["A1", "B1", "C1"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_closed_is_an_error() {
        let (tx, mut source) = ChannelAnswerSource::channel();
        drop(tx);
        let use_case = RunQuizUseCase::new(Arc::new(RecordingPresenter::passive()), params());

        let engine = use_case.params().new_engine(questions());
        let err = use_case.execute(engine, &mut source).await.unwrap_err();
        assert_eq!(err, RunQuizError::InputClosed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_closing_after_last_answer_still_completes() {
        let (tx, mut source) = ChannelAnswerSource::channel();
        let use_case = RunQuizUseCase::new(Arc::new(NoPresenter), params());

        tx.send("A1".to_string()).unwrap();
        drop(tx);

        let engine = use_case
            .params()
            .new_engine(vec![Question::new("Q1").set_right_answer("A1").set_choices(["B1"])]);
        let outcome = use_case.execute(engine, &mut source).await.unwrap();

        assert_eq!(outcome.finish_state, Some(FinishState::Completed));
        assert_eq!(outcome.score, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_closing_mid_quiz_is_an_error() {
        let (tx, mut source) = ChannelAnswerSource::channel();
        let use_case = RunQuizUseCase::new(Arc::new(NoPresenter), params());

        // Answers Q1, then input ends while Q2 is still open
        tx.send("A1".to_string()).unwrap();
        drop(tx);

        let engine = use_case.params().new_engine(questions());
        let err = use_case.execute(engine, &mut source).await.unwrap_err();
        assert_eq!(err, RunQuizError::InputClosed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_tick_interval_is_rejected() {
        let (_tx, mut source) = ChannelAnswerSource::channel();
        let use_case = RunQuizUseCase::new(
            Arc::new(NoPresenter),
            params().with_tick_interval(Duration::ZERO),
        );

        let engine = use_case.params().new_engine(questions());
        let err = use_case.execute(engine, &mut source).await.unwrap_err();
        assert_eq!(err, RunQuizError::ZeroTickInterval);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_quiz_is_rejected() {
        let (_tx, mut source) = ChannelAnswerSource::channel();
        let use_case = RunQuizUseCase::new(Arc::new(NoPresenter), params());

        let err = use_case
            .execute(QuizEngine::new(), &mut source)
            .await
            .unwrap_err();
        assert_eq!(err, RunQuizError::NoQuestions);
    }

    #[tokio::test(start_paused = true)]
    async fn test_external_cancellation() {
        let (_tx, mut source) = ChannelAnswerSource::channel();
        let token = CancellationToken::new();
        let presenter = Arc::new(RecordingPresenter::passive());
        let use_case =
            RunQuizUseCase::new(presenter.clone(), params()).with_cancellation(token.clone());

        let canceller = tokio::spawn(async move {
            time::sleep(Duration::from_millis(2500)).await;
            token.cancel();
        });

        let engine = use_case.params().new_engine(questions());
        let err = use_case.execute(engine, &mut source).await.unwrap_err();
        canceller.await.unwrap();

        assert_eq!(err, RunQuizError::Cancelled);
        assert_eq!(presenter.ticks(), vec![59, 58]);
        assert!(presenter.finishes().is_empty());
    }
}
