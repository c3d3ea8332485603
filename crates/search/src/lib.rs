//! Fuzzy phrase matching for search and autocomplete.
//!
//! This crate provides:
//! - Case folding and diacritic stripping
//! - Reusable prepared target snapshots
//! - Greedy in-order alignment with typo counting
//! - Ranked, limited result sets (optionally scored in parallel)
//!
//! # Example
//!
//! ```
//! use sffuzzy::{prepare, search, Options};
//!
//! let options = Options::new().with_limit(1);
//! let cities = prepare(["Ōsaka;Japan", "Oslo;Norway", "Vientiane;Laos"], &options);
//!
//! let found = search("osakajapan", &cities, &options).unwrap();
//! assert_eq!(found.results.len(), 1);
//! assert_eq!(found.results[0].target, "Ōsaka;Japan");
//! assert_eq!(found.results[0].typos, 1);
//! ```

mod align;
mod cache;
mod error;
mod json;
mod normalize;
mod options;
mod search;
mod terms;

#[cfg(feature = "wasm")]
mod wasm;

pub use align::{align, Alignment, CLEAN_TERM_BONUS, COMPLETE_TERM_BONUS};
pub use cache::{prepare, CachedTarget, PreparedTargets, Target};
pub use error::{Result, SearchError};
pub use json::{parse_targets_json, search_json};
pub use normalize::normalize;
pub use options::Options;
pub use search::{search, search_once, MatchResult, SearchResultSet};
pub use terms::{prepare_search, SearchTerm};
