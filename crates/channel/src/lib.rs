//! Utterance Channel
//!
//! Abstract boundary to the speech stack: recognized text arrives one
//! utterance at a time, and agent lines are handed back as text to be
//! spoken. STT, TTS and the audio transport live behind this seam and are
//! not implemented here.

pub mod console;
pub mod scripted;
pub mod traits;

pub use console::ConsoleChannel;
pub use scripted::ScriptedChannel;
pub use traits::UtteranceChannel;

use thiserror::Error;

/// Channel errors
#[derive(Error, Debug)]
pub enum ChannelError {
    /// The remote side hung up or the channel shut down. Treated by the
    /// driver as a cancellation signal, not a fatal error.
    #[error("Channel closed")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
