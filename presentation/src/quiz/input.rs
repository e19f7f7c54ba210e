//! Terminal answer input
//!
//! Stdin reads block, so a dedicated thread feeds lines into a channel and
//! the quiz loop awaits the channel. The reader outlives the run, which
//! lets the initials prompt keep reading from the same source.

use async_trait::async_trait;
use quiz_application::{AnswerSource, ChannelAnswerSource};
use std::io::{self, BufRead, BufReader};
use std::thread;
use tracing::{debug, warn};

/// [`AnswerSource`] reading lines from stdin (or any blocking reader).
pub struct StdinAnswerSource {
    inner: ChannelAnswerSource,
}

impl StdinAnswerSource {
    /// Start reading from stdin
    pub fn spawn() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    /// Start reading from `reader` on a background thread
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, inner) = ChannelAnswerSource::channel();

        let spawned = thread::Builder::new()
            .name("answer-reader".to_string())
            .spawn(move || {
                for line in reader.lines() {
                    match line {
                        Ok(line) => {
                            if tx.send(line).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            warn!("Failed to read answer input: {}", e);
                            break;
                        }
                    }
                }
                debug!("Answer input reached end of stream");
            });

        // On failure the sender is dropped, so the source reports closed input.
        if let Err(e) = spawned {
            warn!("Could not start answer reader thread: {}", e);
        }

        Self { inner }
    }
}

#[async_trait]
impl AnswerSource for StdinAnswerSource {
    async fn next_answer(&mut self) -> Option<String> {
        self.inner.next_answer().await
    }
}
