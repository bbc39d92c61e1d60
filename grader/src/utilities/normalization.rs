//! Answer text normalization.
//!
//! Both submissions and reference candidates pass through [`normalize`] before any
//! rule is applied, so every matcher can assume lowercase, single-spaced input with
//! no trailing punctuation and American spellings.

/// British→American substitutions, applied sequentially as whole-string
/// substring replacement.
const SPELLING_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("colour", "color"),
    ("grey", "gray"),
    ("centre", "center"),
    ("metre", "meter"),
    ("litre", "liter"),
    ("realise", "realize"),
    ("organise", "organize"),
];

/// Punctuation stripped once from the end of an answer.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

const TRUTHY_ANSWERS: &[&str] = &["true", "t", "yes", "y", "1", "correct", "right"];
const FALSY_ANSWERS: &[&str] = &["false", "f", "no", "n", "0", "incorrect", "wrong"];

/// Truth class of a normalized true/false answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruthValue {
    Truthy,
    Falsy,
}

/// Normalize answer text for comparison.
///
/// Lowercases and trims, collapses internal whitespace runs to a single space,
/// strips a single trailing punctuation character, then applies the
/// British→American spelling table.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");

    if let Some(last) = collapsed.chars().last() {
        if TRAILING_PUNCTUATION.contains(&last) {
            collapsed.pop();
        }
    }

    for (british, american) in SPELLING_SUBSTITUTIONS {
        if collapsed.contains(british) {
            collapsed = collapsed.replace(british, american);
        }
    }

    collapsed
}

/// Classify a normalized answer as a true-variant or false-variant, if it is one.
pub fn classify_truth(text: &str) -> Option<TruthValue> {
    if TRUTHY_ANSWERS.contains(&text) {
        Some(TruthValue::Truthy)
    } else if FALSY_ANSWERS.contains(&text) {
        Some(TruthValue::Falsy)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize("  The Answer  "), "the answer");
    }

    #[test]
    fn test_collapse_internal_whitespace() {
        assert_eq!(normalize("a  b\t c"), "a b c");
    }

    #[test]
    fn test_strip_single_trailing_punctuation() {
        assert_eq!(normalize("Paris."), "paris");
        assert_eq!(normalize("Paris!"), "paris");
        assert_eq!(normalize("really?"), "really");
    }

    #[test]
    fn test_internal_punctuation_kept() {
        assert_eq!(normalize("3.14"), "3.14");
        assert_eq!(normalize("a, b"), "a, b");
    }

    #[test]
    fn test_spelling_substitutions() {
        assert_eq!(normalize("Colour"), "color");
        assert_eq!(normalize("colourful grey centre"), "colorful gray center");
        assert_eq!(normalize("organise and realise"), "organize and realize");
    }

    #[test]
    fn test_idempotent() {
        for input in ["  The  Colour, Grey! ", "3.14", "paris", "a b c."] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_classify_truth_variants() {
        for answer in ["true", "t", "yes", "y", "1", "correct", "right"] {
            assert_eq!(classify_truth(answer), Some(TruthValue::Truthy));
        }
        for answer in ["false", "f", "no", "n", "0", "incorrect", "wrong"] {
            assert_eq!(classify_truth(answer), Some(TruthValue::Falsy));
        }
    }

    #[test]
    fn test_classify_truth_neither() {
        assert_eq!(classify_truth("maybe"), None);
        assert_eq!(classify_truth("26"), None);
        assert_eq!(classify_truth(""), None);
    }
}
