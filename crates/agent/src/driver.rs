//! Conversation driver
//!
//! Single-threaded state machine, one instance per call. Walks the question
//! script over an utterance channel, normalizes each reply, re-prompts once
//! on unintelligible input, and falls back to sentinels so the session
//! never stalls on one question. Exactly one `listen` is pending at any
//! time.
//!
//! Every prompt and utterance is recorded before the state transition that
//! depends on it, so the transcript reconstructs why each transition
//! happened.

use std::sync::Arc;

use uuid::Uuid;

use feedback_agent_channel::{ChannelError, UtteranceChannel};
use feedback_agent_config::{PromptTemplates, SessionConfig};
use feedback_agent_core::{FeedbackRecord, Speaker, YesNoValue};
use feedback_agent_extraction::{extract, extract_yes_no};
use feedback_agent_persistence::{
    FeedbackStore, PersistenceError, SessionArtifacts, SessionRecorder,
};

use crate::script::QuestionScript;
use crate::AgentError;

/// Driver configuration, fixed at session construction
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    /// Session behavior (retry budget, language tag)
    pub session: SessionConfig,
    /// Greeting, farewells and the clarification prefix
    pub prompts: PromptTemplates,
}

/// Conversation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Opt-in prompt, before the first question
    Greeting,
    /// Asking the question at this script index
    Asking(usize),
    /// All questions done, saying the farewell
    Closing,
    /// Customer opted out at the greeting; absorbing
    Declined,
    /// Terminal; triggers finalization
    Done,
}

impl DriverState {
    /// Whether `to` is a legal next state
    pub fn can_advance_to(&self, to: DriverState) -> bool {
        match (*self, to) {
            (DriverState::Greeting, DriverState::Asking(0)) => true,
            (DriverState::Greeting, DriverState::Declined) => true,
            (DriverState::Asking(i), DriverState::Asking(j)) => j == i + 1,
            (DriverState::Asking(_), DriverState::Closing) => true,
            (DriverState::Closing, DriverState::Done) => true,
            (DriverState::Declined, DriverState::Done) => true,
            _ => false,
        }
    }
}

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every question was asked and the farewell spoken
    Completed,
    /// Customer opted out at the greeting
    Declined,
    /// Channel closed mid-conversation; partial answers were kept
    Disconnected,
}

/// Result of one driven session
///
/// Finalization always produces the in-memory record; a storage failure is
/// reported here rather than discarding an already-completed conversation.
#[derive(Debug)]
pub struct SessionOutcome {
    pub record: FeedbackRecord,
    pub end_reason: EndReason,
    pub artifacts: Result<SessionArtifacts, PersistenceError>,
}

/// Question-driver state machine for one feedback call
pub struct ConversationDriver {
    call_id: String,
    config: DriverConfig,
    script: QuestionScript,
    state: DriverState,
    record: FeedbackRecord,
    recorder: SessionRecorder,
}

impl ConversationDriver {
    /// Create a driver for a new session
    ///
    /// Validates the script up front; a malformed script is a configuration
    /// error and no session starts.
    pub fn new(
        script: QuestionScript,
        config: DriverConfig,
        store: Arc<dyn FeedbackStore>,
    ) -> Result<Self, AgentError> {
        script.validate()?;

        let call_id = Uuid::new_v4().to_string();
        let record = FeedbackRecord::new(&call_id, script.answer_seed());
        let recorder = SessionRecorder::new(&call_id, store);

        tracing::info!(call_id = %call_id, questions = script.len(), "Session created");

        Ok(Self {
            call_id,
            config,
            script,
            state: DriverState::Greeting,
            record,
            recorder,
        })
    }

    /// Get the session's call id
    pub fn call_id(&self) -> &str {
        &self.call_id
    }

    /// Get the current state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Drive the conversation to completion and finalize
    ///
    /// Channel closure at any point is a cancellation, not a failure: the
    /// record is finalized with sentinels for everything unresolved. The
    /// customer hears a farewell on every normal path; no error text is
    /// ever spoken.
    pub async fn run<C: UtteranceChannel>(mut self, channel: &mut C) -> SessionOutcome {
        let end_reason = match self.converse(channel).await {
            Ok(reason) => reason,
            Err(ChannelError::Closed) => {
                tracing::info!(call_id = %self.call_id, state = ?self.state, "Channel closed mid-session");
                EndReason::Disconnected
            }
            Err(ChannelError::Io(e)) => {
                tracing::warn!(call_id = %self.call_id, error = %e, "Channel IO failure, treating as hang-up");
                EndReason::Disconnected
            }
        };

        // A hang-up can land here from any state; force terminal
        self.state = DriverState::Done;

        let artifacts = self.recorder.finalize(&mut self.record).await;
        if let Err(e) = &artifacts {
            tracing::error!(call_id = %self.call_id, error = %e, "Failed to persist session artifacts");
        }

        tracing::info!(call_id = %self.call_id, reason = ?end_reason, "Session finished");

        SessionOutcome {
            record: self.record,
            end_reason,
            artifacts,
        }
    }

    /// The state machine proper; returns how the conversation ended
    async fn converse<C: UtteranceChannel>(
        &mut self,
        channel: &mut C,
    ) -> Result<EndReason, ChannelError> {
        // Greeting: opt-in before any question
        let greeting = self.config.prompts.greeting.clone();
        self.speak(channel, &greeting).await?;
        let reply = self.hear(channel).await?;

        match extract_yes_no(&reply) {
            Some(YesNoValue::Yes) => self.transition(DriverState::Asking(0)),
            // Negative or unintelligible both count as opting out
            _ => {
                self.transition(DriverState::Declined);
                let farewell = self.config.prompts.decline_farewell.clone();
                self.speak(channel, &farewell).await?;
                self.transition(DriverState::Done);
                return Ok(EndReason::Declined);
            }
        }

        while let DriverState::Asking(index) = self.state {
            self.ask_question(channel, index).await?;

            let next = if index + 1 < self.script.len() {
                DriverState::Asking(index + 1)
            } else {
                DriverState::Closing
            };
            self.transition(next);
        }

        let farewell = self.config.prompts.completion_farewell.clone();
        self.speak(channel, &farewell).await?;
        self.transition(DriverState::Done);

        Ok(EndReason::Completed)
    }

    /// Ask one question, applying the re-prompt budget
    async fn ask_question<C: UtteranceChannel>(
        &mut self,
        channel: &mut C,
        index: usize,
    ) -> Result<(), ChannelError> {
        let question = self.script.questions()[index].clone();
        let mut budget = self.config.session.retry_budget;
        let mut prompt = question.prompt.clone();

        loop {
            self.speak(channel, &prompt).await?;
            let reply = self.hear(channel).await?;

            match extract(question.kind, &reply) {
                Some(value) => {
                    tracing::debug!(
                        call_id = %self.call_id,
                        question = %question.id,
                        answer = ?value,
                        "Answer stored"
                    );
                    self.record.store_answer(&question.id, value);
                    return Ok(());
                }
                None if budget > 0 => {
                    budget -= 1;
                    prompt = format!(
                        "{}{}",
                        self.config.prompts.clarification_prefix, question.prompt
                    );
                    tracing::debug!(
                        call_id = %self.call_id,
                        question = %question.id,
                        remaining_budget = budget,
                        "Unresolved reply, re-asking"
                    );
                }
                None => {
                    // Sentinel was seeded at session start; keep it
                    tracing::debug!(
                        call_id = %self.call_id,
                        question = %question.id,
                        "Retry budget exhausted, keeping sentinel"
                    );
                    return Ok(());
                }
            }
        }
    }

    /// Record then send one agent line
    async fn speak<C: UtteranceChannel>(
        &mut self,
        channel: &mut C,
        text: &str,
    ) -> Result<(), ChannelError> {
        self.recorder.record(Speaker::Agent, text);
        channel.say(text).await
    }

    /// Receive and record one utterance
    async fn hear<C: UtteranceChannel>(&mut self, channel: &mut C) -> Result<String, ChannelError> {
        let text = channel.listen().await?;
        self.recorder.record(Speaker::User, &text);
        Ok(text)
    }

    fn transition(&mut self, to: DriverState) {
        debug_assert!(
            self.state.can_advance_to(to),
            "illegal transition {:?} -> {:?}",
            self.state,
            to
        );
        tracing::debug!(call_id = %self.call_id, from = ?self.state, to = ?to, "State change");
        self.state = to;
    }

    #[cfg(test)]
    fn record_for_tests(&self) -> &FeedbackRecord {
        &self.record
    }
}
