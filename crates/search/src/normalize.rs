//! Text normalization applied to targets and search phrases.

use crate::Options;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Normalize text into the character sequence used for matching.
///
/// Lowercasing is unconditional and maps each character to exactly one
/// character. When `options.normalize` is set the text is first decomposed,
/// stripped of nonspacing marks and recomposed, so `"Ōsaka"` becomes
/// `['o', 's', 'a', 'k', 'a']`.
pub fn normalize(text: &str, options: &Options) -> Vec<char> {
    if options.normalize {
        strip_marks(text).chars().map(lowercase).collect()
    } else {
        text.chars().map(lowercase).collect()
    }
}

fn strip_marks(text: &str) -> String {
    text.nfd()
        .filter(|c| get_general_category(*c) != GeneralCategory::NonspacingMark)
        .nfc()
        .collect()
}

// First char of the full mapping: 'İ' folds to 'i', final 'Σ' stays 'σ'.
fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(text: &str, normalize_flag: bool) -> String {
        normalize(text, &Options::new().with_normalize(normalize_flag))
            .into_iter()
            .collect()
    }

    #[test]
    fn test_lowercase_always_applies() {
        assert_eq!(normalized("Hello World", false), "hello world");
        assert_eq!(normalized("Hello World", true), "hello world");
    }

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalized("Ōsaka;Japan", true), "osaka;japan");
        assert_eq!(normalized("Crème Brûlée", true), "creme brulee");
    }

    #[test]
    fn test_keeps_diacritics_without_flag() {
        assert_eq!(normalized("Ōsaka", false), "ōsaka");
    }

    #[test]
    fn test_decomposed_input_recomposes() {
        // "e" followed by a combining acute accent
        assert_eq!(normalized("Cafe\u{301}", true), "cafe");
    }

    #[test]
    fn test_spacing_and_enclosing_marks_survive() {
        // KA + AA vowel sign (Mc)
        assert_eq!(normalized("\u{915}\u{93E}", true), "\u{915}\u{93E}");
        // combining enclosing circle (Me)
        assert_eq!(normalized("a\u{20DD}", true), "a\u{20DD}");
    }

    #[test]
    fn test_lowercase_one_char_per_char() {
        assert_eq!(normalized("İstanbul", false), "istanbul");
        assert_eq!(normalized("ΟΔΟΣ", false), "οδοσ");
        assert_eq!(normalized("ΟΔΟΣ", true), "οδοσ");
    }

    #[test]
    fn test_dotted_capital_i_with_normalize() {
        assert_eq!(normalized("İstanbul", true), "istanbul");
    }

    #[test]
    fn test_empty() {
        assert!(normalize("", &Options::new()).is_empty());
    }

    #[test]
    fn test_one_token_per_character() {
        let chars = normalize("Zürich", &Options::new());
        assert_eq!(chars.len(), 6);
    }
}
