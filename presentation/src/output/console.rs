//! Console output formatter for quiz runs

use colored::Colorize;
use quiz_application::QuestionPrompt;
use quiz_domain::{AnswerEvent, AnswerState, FinishState, QuizOutcome};

/// Formats quiz screens for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner shown before the first question
    pub fn format_start(total_questions: usize, duration_secs: u32) -> String {
        let mut output = Self::header("Code Quiz");
        output.push('\n');
        output.push_str(&format!(
            "{} questions, {} seconds. Wrong answers cost time!\n",
            total_questions.to_string().bold(),
            duration_secs.to_string().bold()
        ));
        output.push_str(&format!(
            "{}\n",
            "Type a number (or the answer itself) and press Enter.".dimmed()
        ));
        output
    }

    /// A question with its numbered choices
    pub fn format_question(prompt: &QuestionPrompt) -> String {
        let mut output = format!(
            "\n{} {}\n",
            format!("[{}/{}]", prompt.number, prompt.total).cyan().bold(),
            prompt.title.bold()
        );
        for (handle, choice) in &prompt.choices {
            output.push_str(&format!("  {} {}\n", format!("{}.", handle).yellow(), choice));
        }
        output
    }

    /// Feedback for an answered question
    pub fn format_answer(event: &AnswerEvent, penalty_secs: u32) -> String {
        match event.state {
            AnswerState::Correct => format!("{} {}", "v".green(), "Correct!".green().bold()),
            AnswerState::Incorrect if penalty_secs > 0 => format!(
                "{} {} {}",
                "x".red(),
                "Wrong!".red().bold(),
                format!("(-{}s)", penalty_secs).dimmed()
            ),
            AnswerState::Incorrect => format!("{} {}", "x".red(), "Wrong!".red().bold()),
            AnswerState::Unanswered => String::new(),
        }
    }

    /// Headline for the end of a run
    pub fn format_finished(state: FinishState) -> String {
        match state {
            FinishState::Completed => format!("\n{}", "All done!".green().bold()),
            FinishState::TimedOut => format!("\n{}", "Time's up!".yellow().bold()),
        }
    }

    /// Final score summary
    pub fn format_outcome(outcome: &QuizOutcome) -> String {
        let mut output = Self::section_header("Results");
        output.push_str(&format!(
            "{} {}\n",
            "Final score:".cyan().bold(),
            outcome.score.to_string().bold()
        ));
        output.push_str(&format!(
            "{} {} correct, {} wrong, {} of {} answered\n",
            "Answers:".cyan().bold(),
            outcome.correct,
            outcome.incorrect(),
            outcome.answered,
            outcome.total_questions
        ));
        output.push_str(&format!(
            "{} {}s\n",
            "Time left:".cyan().bold(),
            outcome.time_left
        ));
        output
    }

    pub fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!("{}\n{:^50}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(30))
    }
}
