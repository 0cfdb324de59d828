//! Typed answer values
//!
//! Each scripted question declares an [`AnswerKind`]; the normalizer maps
//! raw utterance text into the matching [`AnswerValue`]. Sentinels (rating 0,
//! yes/no "unknown") are in-domain values meaning "no answer could be
//! determined" and keep the record structurally complete.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of answer a question expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    /// Integer rating from 1 to 5
    Rating1To5,
    /// Yes / no / unknown
    YesNo,
    /// Verbatim free text
    FreeText,
}

/// A 1-5 rating, with 0 reserved as the UNSET sentinel
///
/// 0 means "never resolved", which is distinct from every real rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingValue(u8);

impl RatingValue {
    /// The "never resolved" sentinel
    pub const UNSET: RatingValue = RatingValue(0);

    /// Create a rating, rejecting values outside 0..=5
    pub fn new(value: u8) -> Result<Self, Error> {
        if value > 5 {
            return Err(Error::InvalidRating(value));
        }
        Ok(RatingValue(value))
    }

    /// Raw value, 0 when unset
    pub fn get(&self) -> u8 {
        self.0
    }

    /// True for any real 1-5 rating
    pub fn is_set(&self) -> bool {
        self.0 != 0
    }
}

/// A yes/no answer
///
/// `Unknown` is a first-class terminal value: a customer who declines to
/// clarify still produces a valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNoValue {
    Yes,
    No,
    Unknown,
}

/// A typed answer to one question
///
/// Serializes untagged to match the record contract: ratings as bare
/// integers, yes/no as `"yes"`/`"no"`/`"unknown"`, free text as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Rating(RatingValue),
    YesNo(YesNoValue),
    Text(String),
}

impl AnswerValue {
    /// The sentinel value for a question of the given kind
    pub fn sentinel(kind: AnswerKind) -> Self {
        match kind {
            AnswerKind::Rating1To5 => AnswerValue::Rating(RatingValue::UNSET),
            AnswerKind::YesNo => AnswerValue::YesNo(YesNoValue::Unknown),
            AnswerKind::FreeText => AnswerValue::Text(String::new()),
        }
    }
}

impl From<RatingValue> for AnswerValue {
    fn from(v: RatingValue) -> Self {
        AnswerValue::Rating(v)
    }
}

impl From<YesNoValue> for AnswerValue {
    fn from(v: YesNoValue) -> Self {
        AnswerValue::YesNo(v)
    }
}
