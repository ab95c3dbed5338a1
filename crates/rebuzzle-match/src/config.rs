//! Matcher configuration
//!
//! Environment variables (all optional):
//! - `REBUZZLE_MATCH_NORMALIZE_CAPACITY`: normalization cache entries (default: 200)
//! - `REBUZZLE_MATCH_SIMILARITY_CAPACITY`: similarity cache entries (default: 100)
//! - `REBUZZLE_MATCH_THRESHOLD`: default acceptance threshold 0-100 (default: 85)

use crate::error::{MatchError, Result};

pub const DEFAULT_NORMALIZE_CAPACITY: usize = 200;
pub const DEFAULT_SIMILARITY_CAPACITY: usize = 100;
pub const DEFAULT_THRESHOLD: f64 = 85.0;

pub const ENV_NORMALIZE_CAPACITY: &str = "REBUZZLE_MATCH_NORMALIZE_CAPACITY";
pub const ENV_SIMILARITY_CAPACITY: &str = "REBUZZLE_MATCH_SIMILARITY_CAPACITY";
pub const ENV_THRESHOLD: &str = "REBUZZLE_MATCH_THRESHOLD";

/// Configuration for a [`Matcher`](crate::Matcher)
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// Maximum entries in the normalization cache
    pub normalize_capacity: usize,
    /// Maximum entries in the similarity cache
    pub similarity_capacity: usize,
    /// Threshold used when a call does not supply one (percentage)
    pub default_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            normalize_capacity: DEFAULT_NORMALIZE_CAPACITY,
            similarity_capacity: DEFAULT_SIMILARITY_CAPACITY,
            default_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl MatcherConfig {
    /// Build a configuration from the environment.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let normalize_capacity = lookup(ENV_NORMALIZE_CAPACITY)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.normalize_capacity);

        let similarity_capacity = lookup(ENV_SIMILARITY_CAPACITY)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.similarity_capacity);

        let default_threshold = lookup(ENV_THRESHOLD)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.default_threshold);

        Self {
            normalize_capacity,
            similarity_capacity,
            default_threshold,
        }
    }

    /// Check that the configuration can back a matcher
    pub fn validate(&self) -> Result<()> {
        if self.normalize_capacity == 0 {
            return Err(MatchError::InvalidConfig(
                "normalize_capacity must be greater than zero".to_string(),
            ));
        }
        if self.similarity_capacity == 0 {
            return Err(MatchError::InvalidConfig(
                "similarity_capacity must be greater than zero".to_string(),
            ));
        }
        if !self.default_threshold.is_finite() {
            return Err(MatchError::InvalidConfig(format!(
                "default_threshold must be finite, got {}",
                self.default_threshold
            )));
        }
        Ok(())
    }
}
