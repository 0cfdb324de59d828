//! Channel traits
//!
//! Abstract interface the conversation driver talks through.

use async_trait::async_trait;

use crate::ChannelError;

/// Text in/out contract with the speech stack
///
/// Exactly one `listen` is pending at a time: the driver suspends on it and
/// does no other work until the utterance arrives or the channel closes.
#[async_trait]
pub trait UtteranceChannel: Send {
    /// Speak one agent line to the remote side
    async fn say(&mut self, text: &str) -> Result<(), ChannelError>;

    /// Block until one recognized utterance is available
    ///
    /// Returns `Err(ChannelError::Closed)` when the remote side hangs up.
    async fn listen(&mut self) -> Result<String, ChannelError>;
}
