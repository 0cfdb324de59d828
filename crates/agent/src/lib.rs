//! Conversational feedback agent
//!
//! Features:
//! - Ordered, immutable question script with startup validation
//! - Conversation driver state machine with a bounded re-prompt policy
//! - Sentinel fallback so a session never stalls on one question
//! - Transcript recording causally ordered with every state transition

pub mod driver;
pub mod script;

pub use driver::{
    ConversationDriver, DriverConfig, DriverState, EndReason, SessionOutcome,
};
pub use script::{Question, QuestionScript, ScriptError};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("Conversation error: {0}")]
    Conversation(String),
}
