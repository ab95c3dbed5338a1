//! Error types for matcher construction

use thiserror::Error;

/// Result type for fallible matcher setup
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors that can occur while building a [`Matcher`](crate::Matcher).
///
/// Matching itself is total over its input domain and never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// Configuration value out of range
    #[error("invalid matcher configuration: {0}")]
    InvalidConfig(String),
}
