//! Core types for the feedback agent
//!
//! This crate provides foundational types used across all other crates:
//! - Turn and transcript types
//! - Typed answer values with their sentinels
//! - The feedback record and its JSON contract
//! - Error types

pub mod answer;
pub mod error;
pub mod record;
pub mod turn;

pub use answer::{AnswerKind, AnswerValue, RatingValue, YesNoValue};
pub use error::{Error, Result};
pub use record::{ist_timestamp, FeedbackRecord, FEEDBACK_LANGUAGE};
pub use turn::{Speaker, TurnRecord};
