//! Interactive quiz adapters

pub mod initials;
pub mod input;
pub mod presenter;

pub use initials::prompt_initials;
pub use input::StdinAnswerSource;
pub use presenter::ConsolePresenter;
