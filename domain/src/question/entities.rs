//! Question entity

use super::value_objects::{AnswerEvent, AnswerState, ChoiceHandle};
use crate::notify::Notifier;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// One multiple-choice quiz item.
///
/// Built fluently at authoring time:
///
/// ```
/// use quiz_domain::Question;
///
/// let q = Question::new("Which operator is used to represent AND statements?")
///     .set_right_answer("&&")
///     .set_choices(["||", "+", "&"]);
/// assert_eq!(q.choices().len(), 3);
/// ```
///
/// After authoring only the answer state and the handle mapping change.
/// The right answer never appears among the distractors, and a question
/// accepts exactly one answer.
#[derive(Debug, Default)]
pub struct Question {
    title: String,
    right_answer: String,
    choices: Vec<String>,
    answer_state: AnswerState,
    buttons: HashMap<ChoiceHandle, String>,
    notifier: Notifier<AnswerEvent>,
}

impl Question {
    /// Slot the question emits to when its answer state changes.
    pub const ANSWER_CHANGED: &'static str = "answer_changed";

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the correct answer, dropping it from the distractors if present.
    pub fn set_right_answer(mut self, text: impl Into<String>) -> Self {
        self.right_answer = text.into();
        let right = &self.right_answer;
        self.choices.retain(|c| c != right);
        self
    }

    /// Append distractors in the given order.
    ///
    /// A distractor equal to the right answer is skipped once the answer
    /// is set; [`set_right_answer`](Self::set_right_answer) filters the rest.
    pub fn set_choices<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let has_answer = !self.right_answer.is_empty();
        for text in texts {
            let text = text.into();
            if !(has_answer && text == self.right_answer) {
                self.choices.push(text);
            }
        }
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn right_answer(&self) -> &str {
        &self.right_answer
    }

    /// Distractors in declaration order (never includes the right answer)
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn answer_state(&self) -> AnswerState {
        self.answer_state
    }

    pub fn is_answered(&self) -> bool {
        self.answer_state.is_answered()
    }

    /// All distractors plus the right answer, uniformly shuffled.
    pub fn random_choices(&self) -> Vec<String> {
        self.random_choices_with(&mut rand::thread_rng())
    }

    /// [`random_choices`](Self::random_choices) with a caller-supplied RNG.
    pub fn random_choices_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut all = Vec::with_capacity(self.choices.len() + 1);
        all.extend(self.choices.iter().cloned());
        all.push(self.right_answer.clone());
        // SliceRandom::shuffle is a Fisher-Yates shuffle
        all.shuffle(rng);
        all
    }

    /// Remember which rendered handle shows which choice.
    pub fn set_button_for_choice(&mut self, handle: impl Into<ChoiceHandle>, choice: impl Into<String>) {
        self.buttons.insert(handle.into(), choice.into());
    }

    /// Resolve a rendered handle back to its choice text.
    pub fn choice_for(&self, handle: &ChoiceHandle) -> Option<&str> {
        self.buttons.get(handle).map(String::as_str)
    }

    /// Answer the question.
    ///
    /// Returns the new state on the first call. Every later call is a
    /// no-op returning `None` and emits nothing.
    pub fn answer(&mut self, choice: &str) -> Option<AnswerState> {
        if self.answer_state.is_answered() {
            return None;
        }

        self.answer_state = if choice == self.right_answer {
            AnswerState::Correct
        } else {
            AnswerState::Incorrect
        };

        let event = AnswerEvent::new(choice, self.answer_state);
        self.notifier.emit(Self::ANSWER_CHANGED, &event);
        Some(self.answer_state)
    }

    /// Subscribe to a notification slot of this question.
    pub fn connect<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: FnMut(&AnswerEvent) + Send + 'static,
    {
        self.notifier.connect(name, callback);
    }

    pub fn disconnect(&mut self, name: &str) {
        self.notifier.disconnect(name);
    }

    /// Shorthand for connecting to [`Question::ANSWER_CHANGED`].
    pub fn on_answer_changed<F>(&mut self, callback: F)
    where
        F: FnMut(&AnswerEvent) + Send + 'static,
    {
        self.connect(Self::ANSWER_CHANGED, callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::{Arc, Mutex};

    fn sample() -> Question {
        Question::new("Q1").set_right_answer("A").set_choices(["B", "C"])
    }

    fn capture(question: &mut Question) -> Arc<Mutex<Vec<AnswerEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        question.on_answer_changed(move |event| sink.lock().unwrap().push(event.clone()));
        events
    }

    #[test]
    fn test_fluent_construction() {
        let q = sample();
        assert_eq!(q.title(), "Q1");
        assert_eq!(q.right_answer(), "A");
        assert_eq!(q.choices(), ["B", "C"]);
        assert_eq!(q.answer_state(), AnswerState::Unanswered);
    }

    #[test]
    fn test_set_choices_appends_in_order() {
        let q = Question::new("t")
            .set_right_answer("x")
            .set_choices(["a"])
            .set_choices(["b", "c"]);
        assert_eq!(q.choices(), ["a", "b", "c"]);
    }

    #[test]
    fn test_right_answer_never_in_choices() {
        let q = Question::new("t").set_right_answer("A").set_choices(["A", "B"]);
        assert_eq!(q.choices(), ["B"]);

        let q = Question::new("t").set_choices(["A", "B"]).set_right_answer("A");
        assert_eq!(q.choices(), ["B"]);
    }

    #[test]
    fn test_empty_distractor_kept_before_answer_is_set() {
        let q = Question::new("t").set_choices(["", "B"]).set_right_answer("A");
        assert_eq!(q.choices(), ["", "B"]);
    }

    #[test]
    fn test_wrong_answer_scenario() {
        let mut q = sample();
        let events = capture(&mut q);

        assert_eq!(q.answer("B"), Some(AnswerState::Incorrect));
        assert_eq!(q.answer_state(), AnswerState::Incorrect);
        assert_eq!(
            *events.lock().unwrap(),
            vec![AnswerEvent::new("B", AnswerState::Incorrect)]
        );
    }

    #[test]
    fn test_right_answer() {
        let mut q = sample();
        assert_eq!(q.answer("A"), Some(AnswerState::Correct));
        assert!(q.is_answered());
    }

    #[test]
    fn test_second_answer_is_noop() {
        let mut q = sample();
        let events = capture(&mut q);

        q.answer("A");
        assert_eq!(q.answer("B"), None);
        assert_eq!(q.answer("A"), None);

        assert_eq!(q.answer_state(), AnswerState::Correct);
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_random_choices_contains_everything_once() {
        let mut rng = StdRng::seed_from_u64(7);
        for distractors in 0..6 {
            let names: Vec<String> = (0..distractors).map(|i| format!("d{i}")).collect();
            let q = Question::new("t").set_right_answer("right").set_choices(names.clone());

            for _ in 0..20 {
                let shuffled = q.random_choices_with(&mut rng);
                assert_eq!(shuffled.len(), distractors + 1);
                assert_eq!(shuffled.iter().filter(|c| *c == "right").count(), 1);
                for name in &names {
                    assert_eq!(shuffled.iter().filter(|c| *c == name).count(), 1);
                }
            }
        }
    }

    #[test]
    fn test_random_choices_does_not_mutate() {
        let q = sample();
        let _ = q.random_choices();
        assert_eq!(q.choices(), ["B", "C"]);
    }

    #[test]
    fn test_random_choices_reaches_every_position() {
        let q = sample();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let shuffled = q.random_choices_with(&mut rng);
            let pos = shuffled.iter().position(|c| c == "A").unwrap();
            seen[pos] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_button_lookup() {
        let mut q = sample();
        q.set_button_for_choice("1", "C");
        q.set_button_for_choice("2", "A");

        assert_eq!(q.choice_for(&"1".into()), Some("C"));
        assert_eq!(q.choice_for(&"2".into()), Some("A"));
        assert_eq!(q.choice_for(&"3".into()), None);
        assert_eq!(q.answer_state(), AnswerState::Unanswered);
    }

    #[test]
    fn test_disconnect_stops_notifications() {
        let mut q = sample();
        let events = capture(&mut q);
        q.disconnect(Question::ANSWER_CHANGED);

        q.answer("A");
        assert!(events.lock().unwrap().is_empty());
    }
}
