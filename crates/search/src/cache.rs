//! Target preparation.
//!
//! Normalizing a target is the expensive half of a search, so it is done
//! once by [`prepare`] and the resulting [`PreparedTargets`] snapshot is
//! reused for every subsequent [`search`](crate::search) call.

use crate::normalize::normalize;
use crate::Options;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A raw candidate string with an optional related document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// Text scored against the search phrase
    pub token: String,
    /// Caller data carried through to the match result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_document: Option<String>,
}

impl Target {
    /// Creates a target without a related document.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            related_document: None,
        }
    }

    /// Attaches a related document to this target.
    #[must_use]
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.related_document = Some(document.into());
        self
    }
}

impl From<&str> for Target {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Target {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&String> for Target {
    fn from(token: &String) -> Self {
        Self::new(token.as_str())
    }
}

/// Precomputed normalized form of one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedTarget {
    original: String,
    related_document: Option<String>,
    chars: Box<[char]>,
}

impl CachedTarget {
    /// Normalizes a target according to `options`.
    pub fn new(target: impl Into<Target>, options: &Options) -> Self {
        let Target {
            token,
            related_document,
        } = target.into();
        let chars = normalize(&token, options).into_boxed_slice();
        Self {
            original: token,
            related_document,
            chars,
        }
    }

    /// The untouched source string.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The related document, if one was supplied.
    pub fn related_document(&self) -> Option<&str> {
        self.related_document.as_deref()
    }

    /// Normalized characters used for alignment.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of normalized characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if normalization produced no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Immutable, shareable snapshot of prepared targets.
///
/// Clones share the same allocation. There is no way to mutate a snapshot;
/// updating the target set means preparing a new one and swapping it in.
#[derive(Debug, Clone, Default)]
pub struct PreparedTargets {
    targets: Arc<[CachedTarget]>,
}

impl PreparedTargets {
    /// Targets in input order.
    pub fn as_slice(&self) -> &[CachedTarget] {
        &self.targets
    }
}

impl Deref for PreparedTargets {
    type Target = [CachedTarget];

    fn deref(&self) -> &Self::Target {
        &self.targets
    }
}

impl FromIterator<CachedTarget> for PreparedTargets {
    fn from_iter<I: IntoIterator<Item = CachedTarget>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}

/// Prepare a target list for repeated searches.
///
/// Output order matches input order; empty strings are kept and simply
/// produce an empty cache.
///
/// # Example
/// ```
/// use sffuzzy::{prepare, Options};
///
/// let prepared = prepare(["Ōsaka;Japan", "Oslo;Norway"], &Options::new());
/// assert_eq!(prepared.len(), 2);
/// assert_eq!(prepared[0].original(), "Ōsaka;Japan");
/// assert_eq!(prepared[0].chars()[0], 'o');
/// ```
pub fn prepare<I, T>(targets: I, options: &Options) -> PreparedTargets
where
    I: IntoIterator<Item = T>,
    T: Into<Target>,
{
    let prepared: PreparedTargets = targets
        .into_iter()
        .map(|target| CachedTarget::new(target, options))
        .collect();

    tracing::debug!(
        targets = prepared.len(),
        normalize = options.normalize,
        "Prepared search targets"
    );

    prepared
}
