//! Scoring every prepared target and ranking the results.

use crate::align::{align, Alignment};
use crate::cache::{prepare, CachedTarget, PreparedTargets, Target};
use crate::terms::{prepare_search, SearchTerm};
use crate::Options;
use serde::{Deserialize, Serialize};

/// Score of one target against one search phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Original target string
    pub target: String,
    /// Related document of the target, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_document: Option<String>,
    /// Score (higher is better)
    pub score: u32,
    /// Search characters found in order within the target
    pub match_count: usize,
    /// Target characters skipped after a term started matching
    pub typos: usize,
}

/// Ranked results of a single search call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultSet {
    /// Results, sorted and truncated according to the search options
    pub results: Vec<MatchResult>,
    /// Highest score seen across all targets, before truncation
    pub best_score: u32,
}

impl SearchResultSet {
    /// Number of returned results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if no results were returned.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Search prepared targets for `phrase`.
///
/// Returns `None` when the phrase is empty or only whitespace; every other
/// phrase yields one result per target (before `options.limit`).
///
/// # Example
/// ```
/// use sffuzzy::{prepare, search, Options};
///
/// let options = Options::new();
/// let prepared = prepare(["super man", "super noel", "super du"], &options);
///
/// let found = search("perdu", &prepared, &options).unwrap();
/// assert_eq!(found.results[0].target, "super du");
/// assert_eq!(found.best_score, found.results[0].score);
///
/// assert!(search("", &prepared, &options).is_none());
/// ```
pub fn search(phrase: &str, targets: &PreparedTargets, options: &Options) -> Option<SearchResultSet> {
    if phrase.trim().is_empty() {
        tracing::trace!("Empty search phrase, no result");
        return None;
    }

    let terms = prepare_search(phrase, options);
    let mut results = score_targets(&terms, targets);
    let best_score = results.iter().map(|r| r.score).max().unwrap_or(0);

    if options.sort {
        // Stable: equal scores keep input order.
        results.sort_by(|a, b| b.score.cmp(&a.score));
    }

    if let Some(limit) = options.truncate_to(results.len()) {
        results.truncate(limit);
    }

    tracing::debug!(
        terms = terms.len(),
        targets = targets.len(),
        returned = results.len(),
        best_score,
        "Search complete"
    );

    Some(SearchResultSet {
        results,
        best_score,
    })
}

/// Prepare `targets` and search them once.
///
/// Use [`prepare`] and [`search`] directly when the same targets are searched
/// repeatedly.
pub fn search_once<I, T>(phrase: &str, targets: I, options: &Options) -> Option<SearchResultSet>
where
    I: IntoIterator<Item = T>,
    T: Into<Target>,
{
    search(phrase, &prepare(targets, options), options)
}

fn score_targets(terms: &[SearchTerm], targets: &PreparedTargets) -> Vec<MatchResult> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        targets
            .as_slice()
            .par_iter()
            .map(|target| score_target(terms, target))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        targets
            .iter()
            .map(|target| score_target(terms, target))
            .collect()
    }
}

/// Align and apply the target-level bonuses for one target.
fn score_target(terms: &[SearchTerm], target: &CachedTarget) -> MatchResult {
    let alignment = align(terms, target.chars());
    MatchResult {
        target: target.original().to_string(),
        related_document: target.related_document().map(str::to_string),
        score: final_score(&alignment, target.len()),
        match_count: alignment.match_count,
        typos: alignment.typos,
    }
}

/// Add the bonuses derived from how much of the target was left unmatched.
///
/// Several terms may match the same target characters, so the unmatched
/// remainder can be negative; it is computed signed.
pub(crate) fn final_score(alignment: &Alignment, target_len: usize) -> u32 {
    let typos = alignment.typos as i64;
    let accurate_tokens = target_len as i64 - alignment.match_count as i64;

    let mut score = alignment.score;
    if typos < accurate_tokens {
        score += 1;
    }
    if typos < accurate_tokens / 2 {
        score += 1;
    }
    if typos < accurate_tokens * 2 {
        score += 1;
    }
    if alignment.typos == 0 && alignment.match_count > 0 {
        score += 1;
    }
    score
}
