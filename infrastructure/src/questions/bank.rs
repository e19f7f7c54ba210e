//! Question banks
//!
//! The built-in bank covers JavaScript basics. A `[[questions]]` list in
//! the config file replaces it entirely.

use crate::config::{FileConfig, FileQuestion};
use quiz_domain::Question;

const BUILTIN: &[(&str, &str, &[&str])] = &[
    (
        "Which of the following is an example of an array?",
        "var array = []",
        &["var array = {}", "var array = ()", "var array = <>"],
    ),
    (
        "Which DOM method is used to create a new HTML element?",
        "document.createElement()",
        &[
            "document.newElement()",
            "document.element()",
            "document.spawnElement()",
        ],
    ),
    (
        "True or False: Functions can be passed as arguments to other functions.",
        "true",
        &["false"],
    ),
    (
        "Which operator is used to represent AND statements?",
        "&&",
        &["||", "+", "&"],
    ),
    (
        "True or False: jQuery is a different language from JavaScript.",
        "false",
        &["true"],
    ),
    (
        "Which of the following is an example of a valid variable assignment?",
        "All Choices.",
        &["const x = \"string\";", "let y = 10;", "var z = [];"],
    ),
    (
        "Which operator will compare if two literals are the exact same?",
        "===",
        &["==", "*=", "!="],
    ),
];

/// Where a bank's questions came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankSource {
    BuiltIn,
    Config,
}

/// An ordered set of question definitions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<FileQuestion>,
    source: BankSource,
}

impl QuestionBank {
    /// The built-in JavaScript bank.
    pub fn builtin() -> Self {
        let questions = BUILTIN
            .iter()
            .map(|(title, answer, choices)| FileQuestion {
                title: title.to_string(),
                answer: answer.to_string(),
                choices: choices.iter().map(|c| c.to_string()).collect(),
            })
            .collect();

        Self {
            questions,
            source: BankSource::BuiltIn,
        }
    }

    /// Questions from the config, falling back to the built-in bank.
    pub fn from_config(config: &FileConfig) -> Self {
        if config.questions.is_empty() {
            Self::builtin()
        } else {
            Self {
                questions: config.questions.clone(),
                source: BankSource::Config,
            }
        }
    }

    pub fn source(&self) -> BankSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Fresh, unanswered domain questions in bank order.
    pub fn to_questions(&self) -> Vec<Question> {
        self.questions.iter().map(FileQuestion::to_question).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bank() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 7);
        assert_eq!(bank.source(), BankSource::BuiltIn);

        let questions = bank.to_questions();
        assert_eq!(questions[3].right_answer(), "&&");
        assert_eq!(questions[3].choices(), ["||", "+", "&"]);
        for q in &questions {
            assert!(!q.is_answered());
            assert!(!q.choices().iter().any(|c| c == q.right_answer()));
        }
    }

    #[test]
    fn test_builtin_bank_passes_validation() {
        let config = FileConfig {
            questions: QuestionBank::builtin().questions,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_bank_replaces_builtin() {
        let mut config = FileConfig::default();
        assert_eq!(QuestionBank::from_config(&config).source(), BankSource::BuiltIn);

        config.questions.push(FileQuestion {
            title: "2 + 2?".to_string(),
            answer: "4".to_string(),
            choices: vec!["5".to_string()],
        });
        let bank = QuestionBank::from_config(&config);
        assert_eq!(bank.source(), BankSource::Config);
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.to_questions()[0].title(), "2 + 2?");
    }
}
