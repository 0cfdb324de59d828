//! Scripted channel
//!
//! Simulated remote side fed from a fixed reply queue. Used by driver tests
//! and demos; once the queue runs dry, `listen` reports closure, which
//! doubles as the mid-call hang-up case.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::{ChannelError, UtteranceChannel};

/// Utterance channel that replays canned user replies
pub struct ScriptedChannel {
    replies: VecDeque<String>,
    spoken: Vec<String>,
}

impl ScriptedChannel {
    /// Create a channel that will answer with `replies` in order
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            spoken: Vec::new(),
        }
    }

    /// Every line the agent has spoken so far, in order
    pub fn spoken(&self) -> &[String] {
        &self.spoken
    }

    /// Replies not yet consumed
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

#[async_trait]
impl UtteranceChannel for ScriptedChannel {
    async fn say(&mut self, text: &str) -> Result<(), ChannelError> {
        self.spoken.push(text.to_string());
        Ok(())
    }

    async fn listen(&mut self) -> Result<String, ChannelError> {
        self.replies.pop_front().ok_or(ChannelError::Closed)
    }
}
