//! Publish/subscribe primitive shared by every stateful domain object.
//!
//! [`Notifier`] maps a subscriber name to exactly one callback. Questions use
//! it for "answer changed" events, the quiz engine for ticks and for the
//! finished event.

mod notifier;

pub use notifier::{Callback, Notifier};
