//! Question script
//!
//! The ordered, read-only definition of what gets asked. Swapping the
//! script (localized prompts, a different survey) touches neither the
//! driver nor the normalizer; question kinds drive extraction, ids key the
//! record.

use feedback_agent_core::AnswerKind;
use thiserror::Error;

/// Script integrity errors, fatal at startup before any session begins
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Question script is empty")]
    Empty,

    #[error("Duplicate question id: {0}")]
    DuplicateId(String),

    #[error("Question at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Question '{0}' has an empty prompt")]
    EmptyPrompt(String),
}

/// One scripted question
#[derive(Debug, Clone)]
pub struct Question {
    /// Stable id, used as the answer key in the feedback record
    pub id: String,
    /// Kind of answer this question expects
    pub kind: AnswerKind,
    /// Prompt text spoken to the customer
    pub prompt: String,
}

impl Question {
    pub fn new(id: impl Into<String>, kind: AnswerKind, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            prompt: prompt.into(),
        }
    }
}

/// Ordered, immutable sequence of questions
#[derive(Debug, Clone)]
pub struct QuestionScript {
    questions: Vec<Question>,
}

impl QuestionScript {
    /// Build a script from questions in ask order
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The production five-question Hinglish service-feedback script
    pub fn hinglish_default() -> Self {
        Self::new(vec![
            Question::new(
                "q1_overall_rating_1to5",
                AnswerKind::Rating1To5,
                "Pehle mujhe batayiye, overall service ka rating kya denge aap? 1 se 5 mein.",
            ),
            Question::new(
                "q2_washing_yesno",
                AnswerKind::YesNo,
                "Theek hai. Vehicle washing satisfactory thi? Haan ya nahi?",
            ),
            Question::new(
                "q3_advisor_behavior_1to5",
                AnswerKind::Rating1To5,
                "Achha. Service advisor ka behavior kaisa tha? 1 se 5 rating dijiye.",
            ),
            Question::new(
                "q4_promised_time_yesno",
                AnswerKind::YesNo,
                "Samajh gayi. Kya vehicle promised time pe deliver hui thi? Haan ya nahi?",
            ),
            Question::new(
                "q5_additional_comments_text",
                AnswerKind::FreeText,
                "Bilkul theek. Koi additional comments ya suggestions hain aapke paas?",
            ),
        ])
    }

    /// Check script integrity; any failure is a configuration error
    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.questions.is_empty() {
            return Err(ScriptError::Empty);
        }

        let mut seen = std::collections::HashSet::new();
        for (position, question) in self.questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(ScriptError::EmptyId(position));
            }
            if question.prompt.trim().is_empty() {
                return Err(ScriptError::EmptyPrompt(question.id.clone()));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(ScriptError::DuplicateId(question.id.clone()));
            }
        }

        Ok(())
    }

    /// Questions in ask order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// `(id, kind)` pairs for seeding a record with sentinels
    pub fn answer_seed(&self) -> impl Iterator<Item = (&str, AnswerKind)> {
        self.questions.iter().map(|q| (q.id.as_str(), q.kind))
    }
}
