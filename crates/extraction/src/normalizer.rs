//! Answer normalizer
//!
//! Pure functions from raw utterance text to typed answers. `None` means
//! UNRESOLVED: the text was attempted but no value could be extracted, which
//! is distinct from the UNSET/Unknown sentinels the driver stores once the
//! retry budget is exhausted.

use std::collections::BTreeSet;

use feedback_agent_core::{AnswerKind, AnswerValue, RatingValue, YesNoValue};

use crate::vocabulary::{AFFIRMATIVE_WORDS, NEGATIVE_WORDS, NUMBER_WORDS};

/// Vocabulary entries at least this long also match as substrings of a
/// token, catching agglutinated recognizer output ("haanji bilkulll").
/// Shorter entries ("do", "na", "ji") match whole tokens only.
const SUBSTRING_MIN_CHARS: usize = 3;

// Devanagari matras and signs are combining marks, not alphanumerics, so
// the whole block is kept wholesale.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Lowercase the text and replace punctuation with spaces
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_word_char(c) {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                ' '
            }
        })
        .collect()
}

fn token_matches(token: &str, word: &str) -> bool {
    token == word || (word.chars().count() >= SUBSTRING_MIN_CHARS && token.contains(word))
}

/// Extract a 1-5 rating from free-form text
///
/// Exactly one distinct rating value mentioned wins; zero matches or
/// conflicting values (e.g. "teen ya chaar") are unresolved, never
/// auto-resolved. UNSET (0) is never produced here.
pub fn extract_rating(text: &str) -> Option<RatingValue> {
    let normalized = normalize_text(text);
    let mut seen: BTreeSet<u8> = BTreeSet::new();

    for token in normalized.split_whitespace() {
        for (word, value) in NUMBER_WORDS {
            if token_matches(token, word) {
                seen.insert(*value);
            }
        }
    }

    if seen.len() == 1 {
        let value = seen.into_iter().next()?;
        RatingValue::new(value).ok()
    } else {
        None
    }
}

/// Extract a yes/no answer from free-form text
///
/// Affirmative-only matches resolve to `Yes`, negative-only to `No`. Text
/// matching both vocabularies ("haan... nahi nahi") or neither is
/// unresolved; the terminal `Unknown` sentinel is the driver's decision,
/// not the normalizer's.
pub fn extract_yes_no(text: &str) -> Option<YesNoValue> {
    let normalized = normalize_text(text);

    let mut affirmative = false;
    let mut negative = false;
    for token in normalized.split_whitespace() {
        affirmative |= AFFIRMATIVE_WORDS.iter().any(|w| token_matches(token, w));
        negative |= NEGATIVE_WORDS.iter().any(|w| token_matches(token, w));
    }

    match (affirmative, negative) {
        (true, false) => Some(YesNoValue::Yes),
        (false, true) => Some(YesNoValue::No),
        _ => None,
    }
}

/// Extract the answer for a declared kind; `None` means unresolved
///
/// Free text is a verbatim trimmed passthrough and always resolves; the
/// empty string is a valid answer meaning "no comment".
pub fn extract(kind: AnswerKind, text: &str) -> Option<AnswerValue> {
    match kind {
        AnswerKind::Rating1To5 => extract_rating(text).map(AnswerValue::Rating),
        AnswerKind::YesNo => extract_yes_no(text).map(AnswerValue::YesNo),
        AnswerKind::FreeText => Some(AnswerValue::Text(text.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_digits() {
        for digit in 1..=5u8 {
            let text = format!("rating {digit} hai");
            assert_eq!(extract_rating(&text), Some(RatingValue::new(digit).unwrap()));
        }
    }

    #[test]
    fn test_rating_english_words() {
        assert_eq!(extract_rating("one"), Some(RatingValue::new(1).unwrap()));
        assert_eq!(extract_rating("I'd say two"), Some(RatingValue::new(2).unwrap()));
        assert_eq!(extract_rating("three"), Some(RatingValue::new(3).unwrap()));
        assert_eq!(extract_rating("four"), Some(RatingValue::new(4).unwrap()));
        assert_eq!(extract_rating("five, definitely"), Some(RatingValue::new(5).unwrap()));
    }

    #[test]
    fn test_rating_hindi_words() {
        assert_eq!(extract_rating("ek"), Some(RatingValue::new(1).unwrap()));
        assert_eq!(extract_rating("do denge"), Some(RatingValue::new(2).unwrap()));
        assert_eq!(extract_rating("teen"), Some(RatingValue::new(3).unwrap()));
        assert_eq!(extract_rating("chaar dungi"), Some(RatingValue::new(4).unwrap()));
        assert_eq!(extract_rating("paanch, bilkul paanch"), Some(RatingValue::new(5).unwrap()));
    }

    #[test]
    fn test_rating_devanagari() {
        assert_eq!(extract_rating("पांच"), Some(RatingValue::new(5).unwrap()));
        assert_eq!(extract_rating("चार"), Some(RatingValue::new(4).unwrap()));
        assert_eq!(extract_rating("तीन"), Some(RatingValue::new(3).unwrap()));
        assert_eq!(extract_rating("दो"), Some(RatingValue::new(2).unwrap()));
        assert_eq!(extract_rating("एक"), Some(RatingValue::new(1).unwrap()));
    }

    #[test]
    fn test_every_number_word_resolves_to_its_value() {
        for (word, value) in crate::vocabulary::NUMBER_WORDS {
            assert_eq!(
                extract_rating(word),
                Some(RatingValue::new(*value).unwrap()),
                "word: {word}"
            );
        }
    }

    #[test]
    fn test_rating_conflicting_values_unresolved() {
        assert_eq!(extract_rating("teen ya chaar"), None);
        assert_eq!(extract_rating("1 se 5"), None);
    }

    #[test]
    fn test_rating_no_match_unresolved() {
        assert_eq!(extract_rating("pata nahi"), None);
        assert_eq!(extract_rating(""), None);
    }

    #[test]
    fn test_rating_same_value_twice_is_unambiguous() {
        // "char" and "chaar" both map to 4: one distinct value, no conflict
        assert_eq!(extract_rating("char, chaar"), Some(RatingValue::new(4).unwrap()));
    }

    #[test]
    fn test_yes_no_affirmative_vocabulary() {
        for word in crate::vocabulary::AFFIRMATIVE_WORDS {
            assert_eq!(extract_yes_no(word), Some(YesNoValue::Yes), "word: {word}");
        }
    }

    #[test]
    fn test_yes_no_negative_vocabulary() {
        for word in crate::vocabulary::NEGATIVE_WORDS {
            assert_eq!(extract_yes_no(word), Some(YesNoValue::No), "word: {word}");
        }
    }

    #[test]
    fn test_yes_no_both_unresolved() {
        assert_eq!(extract_yes_no("haan nahi pata"), None);
    }

    #[test]
    fn test_yes_no_neither_unresolved() {
        assert_eq!(extract_yes_no("kya bola aapne"), None);
        assert_eq!(extract_yes_no(""), None);
    }

    #[test]
    fn test_yes_no_with_punctuation() {
        assert_eq!(extract_yes_no("Haan, bilkul!"), Some(YesNoValue::Yes));
        assert_eq!(extract_yes_no("Nahi."), Some(YesNoValue::No));
    }

    #[test]
    fn test_free_text_identity_on_trimmed_input() {
        assert_eq!(
            extract(AnswerKind::FreeText, "  Bahut achhi service  "),
            Some(AnswerValue::Text("Bahut achhi service".to_string()))
        );
        assert_eq!(
            extract(AnswerKind::FreeText, ""),
            Some(AnswerValue::Text(String::new()))
        );
    }

    #[test]
    fn test_extract_dispatches_by_kind() {
        assert_eq!(
            extract(AnswerKind::Rating1To5, "paanch"),
            Some(AnswerValue::Rating(RatingValue::new(5).unwrap()))
        );
        assert_eq!(
            extract(AnswerKind::YesNo, "ji haan"),
            Some(AnswerValue::YesNo(YesNoValue::Yes))
        );
        assert_eq!(extract(AnswerKind::Rating1To5, "hmm"), None);
    }

    #[test]
    fn test_idempotence() {
        let inputs = ["paanch", "haan nahi", "Theek hai", "", "4"];
        for input in inputs {
            for kind in [AnswerKind::Rating1To5, AnswerKind::YesNo, AnswerKind::FreeText] {
                assert_eq!(extract(kind, input), extract(kind, input));
            }
        }
    }

    #[test]
    fn test_normalize_text_strips_punctuation() {
        assert_eq!(normalize_text("Nahi, abhi busy hoon!"), "nahi  abhi busy hoon ");
    }
}
