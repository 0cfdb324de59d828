//! Answer normalization
//!
//! Maps raw recognized Hinglish text to typed answer values using closed,
//! enumerated vocabularies. Matching is substring/word-boundary based, not
//! full NLU: a closed vocabulary resolves the overwhelming majority of short
//! spoken answers in this domain and keeps every extracted field
//! deterministic and auditable. Free-text answers bypass normalization so
//! nuance is preserved verbatim.

pub mod normalizer;
pub mod vocabulary;

pub use normalizer::{extract, extract_rating, extract_yes_no, normalize_text};
pub use vocabulary::{AFFIRMATIVE_WORDS, NEGATIVE_WORDS, NUMBER_WORDS};
