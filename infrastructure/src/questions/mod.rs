//! Question bank loading

mod bank;

pub use bank::{BankSource, QuestionBank};
