//! Conversation turn types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    /// The feedback agent
    Agent,
    /// The customer on the call
    User,
}

impl Speaker {
    /// Display name used in transcript lines
    pub fn display_name(&self) -> &'static str {
        match self {
            Speaker::Agent => "Riya",
            Speaker::User => "User",
        }
    }
}

/// One conversational exchange, as recorded in the transcript
///
/// Turns are append-only: once created they are never mutated or removed
/// for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Speaker of this turn
    pub speaker: Speaker,
    /// Recognized or spoken text
    pub text: String,
    /// Position in the transcript, strictly increasing from 0
    pub sequence_index: u32,
    /// Wall-clock time the turn was recorded
    pub timestamp: DateTime<Utc>,
}

impl TurnRecord {
    /// Create a new turn record stamped with the current time
    pub fn new(speaker: Speaker, text: impl Into<String>, sequence_index: u32) -> Self {
        Self {
            speaker,
            text: text.into(),
            sequence_index,
            timestamp: Utc::now(),
        }
    }

    /// Render as a transcript line: `"<speaker>: <text>"`
    pub fn transcript_line(&self) -> String {
        format!("{}: {}", self.speaker.display_name(), self.text)
    }
}
