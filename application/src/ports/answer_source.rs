//! Answer input port
//!
//! The quiz loop waits on an [`AnswerSource`] at the same time as the tick
//! interval, so implementations must be cancel-safe: dropping a pending
//! `next_answer` future must not lose input.

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Stream of raw user answers (a typed handle or the choice text itself).
#[async_trait]
pub trait AnswerSource: Send {
    /// Next line of input, or `None` once input is closed.
    async fn next_answer(&mut self) -> Option<String>;
}

/// [`AnswerSource`] backed by an unbounded channel.
///
/// `UnboundedReceiver::recv` is cancel-safe, which makes this the adapter
/// the other sources build on.
pub struct ChannelAnswerSource {
    rx: mpsc::UnboundedReceiver<String>,
}

impl ChannelAnswerSource {
    pub fn new(rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self { rx }
    }

    /// Create a connected sender/source pair.
    pub fn channel() -> (mpsc::UnboundedSender<String>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl AnswerSource for ChannelAnswerSource {
    async fn next_answer(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}
