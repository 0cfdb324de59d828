//! Closed vocabularies for answer normalization
//!
//! Vocabularies are data, not code: adding a language or a phonetic variant
//! is an additive entry here and touches neither the normalizer nor the
//! conversation driver. Entries cover English, romanized Hindi with the
//! phonetic variations that speech recognition produces, and Devanagari.

/// Number words for ratings 1-5, `(word, value)`
pub const NUMBER_WORDS: &[(&str, u8)] = &[
    // English
    ("5", 5),
    ("five", 5),
    ("fiv", 5),
    ("4", 4),
    ("four", 4),
    ("for", 4),
    ("3", 3),
    ("three", 3),
    ("tree", 3),
    ("2", 2),
    ("two", 2),
    ("too", 2),
    ("tu", 2),
    ("1", 1),
    ("one", 1),
    ("won", 1),
    // Romanized Hindi with phonetic variations
    ("paanch", 5),
    ("panch", 5),
    ("paanj", 5),
    ("punch", 5),
    ("chaar", 4),
    ("char", 4),
    ("caar", 4),
    ("teen", 3),
    ("tin", 3),
    ("tean", 3),
    ("tina", 3),
    ("do", 2),
    ("dho", 2),
    ("ek", 1),
    ("aek", 1),
    ("eak", 1),
    // Devanagari
    ("पांच", 5),
    ("पाँच", 5),
    ("चार", 4),
    ("तीन", 3),
    ("दो", 2),
    ("एक", 1),
];

/// Affirmative vocabulary for yes/no answers
pub const AFFIRMATIVE_WORDS: &[&str] = &[
    "yes", "yeah", "yep", "yup", "haan", "ha", "han", "hun", "haa", "haanji", "hanji", "bilkul",
    "bilkool", "ji", "jee", "theek", "thik", "teek", "tick", "sahi", "sahe", "saahi", "okay", "ok",
    "sure", "achha", "acha", "accha",
    // Devanagari
    "हां", "हाँ", "जी", "बिल्कुल", "ठीक", "सही", "अच्छा",
];

/// Negative vocabulary for yes/no answers
pub const NEGATIVE_WORDS: &[&str] = &[
    "no", "nope", "nah", "na", "nahi", "nahin", "nai", "nay", "nehi", "nahe",
    // Devanagari
    "नहीं", "ना", "नाही",
];
