//! Search options shared by preparation and search.

use serde::{Deserialize, Serialize};

/// Options controlling normalization, ordering and truncation.
///
/// The same options should be passed to [`prepare`](crate::prepare) and to
/// [`search`](crate::search) so that targets and phrases are normalized alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Order results by descending score (ties keep input order)
    #[serde(default = "default_true")]
    pub sort: bool,

    /// Strip diacritical marks before comparison (lowercasing always applies)
    #[serde(default = "default_true")]
    pub normalize: bool,

    /// Maximum number of results; zero or negative means no limit
    #[serde(default)]
    pub limit: i64,
}

fn default_true() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sort: true,
            normalize: true,
            limit: 0,
        }
    }
}

impl Options {
    /// Creates options with sorting and normalization enabled and no limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether results are sorted by descending score.
    #[must_use]
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Sets whether diacritics are stripped.
    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Sets the result limit. Zero or negative disables truncation.
    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the length a result list of `total` entries must be cut to,
    /// or `None` when the limit does not apply.
    pub fn truncate_to(&self, total: usize) -> Option<usize> {
        if self.limit <= 0 {
            return None;
        }
        match usize::try_from(self.limit) {
            Ok(limit) if limit < total => Some(limit),
            _ => None,
        }
    }
}
