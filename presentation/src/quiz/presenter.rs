//! Console presenter for quiz runs

use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::CountdownBar;
use colored::Colorize;
use quiz_application::{QuestionPrompt, QuizPresenter};
use quiz_domain::{AnswerEvent, AnswerState, FinishState};
use std::sync::Mutex;

/// Renders quiz events on the terminal with a countdown bar.
pub struct ConsolePresenter {
    config: OutputConfig,
    penalty_secs: u32,
    countdown: Mutex<Option<CountdownBar>>,
}

impl ConsolePresenter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            penalty_secs: 0,
            countdown: Mutex::new(None),
        }
    }

    /// Seconds a wrong answer costs, shown in feedback and taken off the bar
    pub fn with_penalty(mut self, seconds: u32) -> Self {
        self.penalty_secs = seconds;
        self
    }

    /// Seconds shown on the countdown, if a run is in progress
    pub fn seconds_left(&self) -> Option<u64> {
        let guard = self.countdown.lock().ok()?;
        guard.as_ref().map(CountdownBar::seconds_left)
    }

    fn print(&self, text: &str) {
        if let Ok(guard) = self.countdown.lock()
            && let Some(bar) = guard.as_ref()
        {
            bar.println(text);
        } else {
            println!("{}", text);
        }
    }
}

impl QuizPresenter for ConsolePresenter {
    fn on_start(&self, total_questions: usize, duration_secs: u32) {
        println!(
            "{}",
            ConsoleFormatter::format_start(total_questions, duration_secs)
        );

        let bar = if self.config.show_progress {
            CountdownBar::new(duration_secs)
        } else {
            CountdownBar::hidden(duration_secs)
        };
        if let Ok(mut guard) = self.countdown.lock() {
            *guard = Some(bar);
        }
    }

    fn on_question(&self, prompt: &QuestionPrompt) {
        self.print(&ConsoleFormatter::format_question(prompt));
    }

    fn on_tick(&self, seconds_left: u32) {
        if let Ok(guard) = self.countdown.lock()
            && let Some(bar) = guard.as_ref()
        {
            bar.set_left(seconds_left);
        }
    }

    fn on_answer(&self, event: &AnswerEvent) {
        self.print(&ConsoleFormatter::format_answer(event, self.penalty_secs));

        if event.state == AnswerState::Incorrect
            && let Ok(guard) = self.countdown.lock()
            && let Some(bar) = guard.as_ref()
        {
            bar.penalize(self.penalty_secs);
        }
    }

    fn on_finished(&self, state: FinishState) {
        if let Ok(mut guard) = self.countdown.lock()
            && let Some(bar) = guard.take()
        {
            bar.finish();
        }
        println!("{}", ConsoleFormatter::format_finished(state));
    }

    fn on_unrecognized_input(&self, input: &str) {
        self.print(&format!(
            "{} '{}' is not one of the choices",
            "?".yellow(),
            input
        ));
    }
}
