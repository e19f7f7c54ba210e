//! Quiz questions and their answer state machine.

pub mod entities;
pub mod value_objects;

pub use entities::Question;
pub use value_objects::{AnswerEvent, AnswerState, ChoiceHandle};
