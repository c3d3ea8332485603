//! Greedy left-to-right alignment of search terms against a target.
//!
//! Each term is aligned independently from the start of the target with two
//! monotonic cursors and no backtracking, so a term costs
//! `O(term.len() + target.len())`. Target characters skipped before a term's
//! first match are free; once the term has started matching, every skipped
//! target character counts as a typo.

use crate::terms::SearchTerm;

/// Bonus for a term whose characters were all found.
pub const COMPLETE_TERM_BONUS: u32 = 2;

/// Bonus for a term that matched at least once without typos.
pub const CLEAN_TERM_BONUS: u32 = 1;

/// Totals accumulated while aligning every term against one target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Term characters found, in order, in the target
    pub match_count: usize,
    /// Target characters skipped after a term started matching
    pub typos: usize,
    /// Per-term score: one per match plus term bonuses
    pub score: u32,
}

/// Align all `terms` against `target`, summing the per-term results.
pub fn align(terms: &[SearchTerm], target: &[char]) -> Alignment {
    terms
        .iter()
        .map(|term| align_term(term.chars(), target))
        .fold(Alignment::default(), |total, term| Alignment {
            match_count: total.match_count + term.match_count,
            typos: total.typos + term.typos,
            score: total.score + term.score,
        })
}

/// Align a single term.
fn align_term(term: &[char], target: &[char]) -> Alignment {
    let mut term_i = 0;
    let mut target_i = 0;
    let mut typos = 0;

    // term_i <= term.len() and target_i <= target.len(); both only grow.
    while term_i < term.len() && target_i < target.len() {
        if target[target_i] == term[term_i] {
            term_i += 1;
        } else if term_i != 0 {
            typos += 1;
        }
        target_i += 1;
    }

    let match_count = term_i;
    let mut score = match_count as u32;
    if match_count == term.len() {
        score += COMPLETE_TERM_BONUS;
    }
    if match_count > 0 && typos == 0 {
        score += CLEAN_TERM_BONUS;
    }

    Alignment {
        match_count,
        typos,
        score,
    }
}
