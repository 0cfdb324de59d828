//! Session recorder
//!
//! Owns the in-memory transcript buffer for one session and, at
//! finalization, writes the transcript and the feedback record through the
//! store. The buffer is append-only; turns are recorded before the state
//! transition that depends on them, so the transcript always explains the
//! driver's decisions.

use std::sync::Arc;

use feedback_agent_core::{FeedbackRecord, Speaker, TurnRecord};

use crate::{FeedbackStore, PersistenceError};

/// Paths of the two artifacts written at finalization
#[derive(Debug, Clone)]
pub struct SessionArtifacts {
    pub transcript_path: std::path::PathBuf,
    pub record_path: std::path::PathBuf,
}

/// Per-session transcript buffer plus the write-out at session end
pub struct SessionRecorder {
    call_id: String,
    turns: Vec<TurnRecord>,
    next_sequence: u32,
    store: Arc<dyn FeedbackStore>,
}

impl SessionRecorder {
    /// Create a recorder for one call
    pub fn new(call_id: impl Into<String>, store: Arc<dyn FeedbackStore>) -> Self {
        Self {
            call_id: call_id.into(),
            turns: Vec::new(),
            next_sequence: 0,
            store,
        }
    }

    /// Append one turn to the transcript buffer
    pub fn record(&mut self, speaker: Speaker, text: &str) {
        let turn = TurnRecord::new(speaker, text, self.next_sequence);
        self.next_sequence += 1;
        self.turns.push(turn);
    }

    /// Turns recorded so far
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// Transcript lines in sequence order
    pub fn transcript_lines(&self) -> Vec<String> {
        self.turns.iter().map(TurnRecord::transcript_line).collect()
    }

    /// Write both artifacts, filling `transcript_path` on the record
    ///
    /// The transcript goes first so its path lands in the record. A failed
    /// write is returned to the caller; the in-memory record is untouched
    /// and can be retried or logged.
    pub async fn finalize(
        &self,
        record: &mut FeedbackRecord,
    ) -> Result<SessionArtifacts, PersistenceError> {
        let transcript_path = self
            .store
            .save_transcript(&self.call_id, &self.transcript_lines())
            .await?;
        record.transcript_path = transcript_path.display().to_string();

        let record_path = self.store.save_record(record).await?;

        tracing::info!(
            call_id = %self.call_id,
            turns = self.turns.len(),
            "Session artifacts written"
        );

        Ok(SessionArtifacts {
            transcript_path,
            record_path,
        })
    }
}
