//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur at the serialized boundary of the search crate.
///
/// Scoring itself never fails; only decoding caller-supplied payloads can.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Target payload is not a JSON array of strings or target objects
    #[error("Invalid targets payload: {0}")]
    InvalidTargets(#[from] serde_json::Error),
}
