//! The feedback record and its JSON contract
//!
//! Field order and key names are a fixed wire contract (consumers parse the
//! output), not an implementation detail. The `q1..q5` answer keys sort
//! lexicographically in question order, so a `BTreeMap` serializes them
//! exactly as documented.

use std::collections::BTreeMap;

use chrono::{FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::answer::{AnswerKind, AnswerValue};

/// The only language this agent converses in
pub const FEEDBACK_LANGUAGE: &str = "hinglish";

/// IST offset from UTC (+05:30)
const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// Current time in IST, formatted `YYYY-MM-DD HH:MM:SS`
pub fn ist_timestamp() -> String {
    // east_opt only fails for out-of-range offsets; +05:30 is always valid
    let ist = FixedOffset::east_opt(IST_OFFSET_SECONDS).unwrap();
    Utc::now()
        .with_timezone(&ist)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// One structured feedback record per call
///
/// Created at session start with every scripted answer pre-seeded to its
/// sentinel, so the record is structurally complete even when semantically
/// incomplete. Filled field-by-field as questions resolve; closed to further
/// mutation once finalized and handed to storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Unique call identifier, generated at session start
    pub call_id: String,
    /// Session start time in IST, `YYYY-MM-DD HH:MM:SS`
    pub timestamp_ist: String,
    /// Always `"hinglish"`
    pub language: String,
    /// Question id -> typed answer, exactly one entry per scripted question
    pub answers: BTreeMap<String, AnswerValue>,
    /// Path of the transcript artifact, filled at finalization
    pub transcript_path: String,
}

impl FeedbackRecord {
    /// Create a record for a new session, seeding sentinels for each question
    ///
    /// `questions` yields `(id, kind)` pairs in script order.
    pub fn new<'a>(
        call_id: impl Into<String>,
        questions: impl IntoIterator<Item = (&'a str, AnswerKind)>,
    ) -> Self {
        let answers = questions
            .into_iter()
            .map(|(id, kind)| (id.to_string(), AnswerValue::sentinel(kind)))
            .collect();

        Self {
            call_id: call_id.into(),
            timestamp_ist: ist_timestamp(),
            language: FEEDBACK_LANGUAGE.to_string(),
            answers,
            transcript_path: String::new(),
        }
    }

    /// Store a resolved answer
    ///
    /// Unknown question ids are ignored with the previous value kept; the
    /// record only ever holds the scripted key set.
    pub fn store_answer(&mut self, question_id: &str, value: AnswerValue) {
        if let Some(slot) = self.answers.get_mut(question_id) {
            *slot = value;
        }
    }

    /// True once every answer differs from its sentinel
    pub fn is_fully_answered(&self) -> bool {
        self.answers.values().all(|v| match v {
            AnswerValue::Rating(r) => r.is_set(),
            AnswerValue::YesNo(yn) => *yn != crate::answer::YesNoValue::Unknown,
            AnswerValue::Text(_) => true,
        })
    }
}
