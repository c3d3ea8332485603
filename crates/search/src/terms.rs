//! Search phrase preparation.

use crate::normalize::normalize;
use crate::Options;

/// One space-separated term of a normalized search phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    chars: Box<[char]>,
}

impl SearchTerm {
    /// Creates a term from already normalized characters.
    pub fn new(chars: impl Into<Box<[char]>>) -> Self {
        Self {
            chars: chars.into(),
        }
    }

    /// Characters of the term.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the term.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the term has no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Split a search phrase into ordered, normalized terms.
///
/// The phrase is normalized with the same rules as targets, then split on
/// single spaces. Runs of spaces would yield empty terms; those are dropped.
pub fn prepare_search(phrase: &str, options: &Options) -> Vec<SearchTerm> {
    normalize(phrase, options)
        .split(|c| *c == ' ')
        .filter(|term| !term.is_empty())
        .map(SearchTerm::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(phrase: &str) -> Vec<String> {
        prepare_search(phrase, &Options::new())
            .iter()
            .map(|term| term.chars().iter().collect())
            .collect()
    }

    #[test]
    fn test_single_term() {
        assert_eq!(terms("OsakaJapan"), vec!["osakajapan"]);
    }

    #[test]
    fn test_multiple_terms_keep_order() {
        assert_eq!(terms("San Fransisco"), vec!["san", "fransisco"]);
    }

    #[test]
    fn test_repeated_spaces_dropped() {
        assert_eq!(terms(" hong  kong "), vec!["hong", "kong"]);
    }

    #[test]
    fn test_terms_are_normalized() {
        assert_eq!(terms("Ōsaka"), vec!["osaka"]);
    }

    #[test]
    fn test_term_length() {
        let prepared = prepare_search("ibb yemen", &Options::new());
        assert_eq!(prepared[0].len(), 3);
        assert_eq!(prepared[1].len(), 5);
    }
}
