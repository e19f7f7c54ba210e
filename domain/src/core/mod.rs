//! Core domain concepts shared across all subdomains.
//!
//! - [`error::QuizError`]: invalid call order on the quiz engine

pub mod error;
