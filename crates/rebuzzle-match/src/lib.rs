//! Rebuzzle Answer Matching
//!
//! Decides whether a player's typed guess should be accepted for a puzzle
//! answer despite typos, punctuation, and casing differences.
//!
//! - [`normalize()`] - canonical form (lowercase, alphanumerics, single spaces)
//! - [`distance::levenshtein`] - edit distance with a length short-circuit
//! - [`Matcher`] - similarity scoring with bounded LRU memoization
//! - [`Verdict`] - whole-answer decision plus per-word feedback
//!
//! # Example
//!
//! ```rust
//! use rebuzzle_match::Matcher;
//!
//! let matcher = Matcher::new();
//! assert_eq!(matcher.similarity("sunflower", "sunflower"), 100.0);
//! assert!(matcher.fuzzy_match("sunfower", "sunflower"));
//! assert!(!matcher.fuzzy_match("cat", "dog"));
//! assert!(matcher.contains_fuzzy_match("I love sunflowers today", "sunflower"));
//! ```
//!
//! The free functions at the crate root delegate to a process-wide
//! [`global()`] matcher configured from the environment.

use std::sync::OnceLock;

use tracing::warn;

pub mod cache;
pub mod config;
pub mod distance;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod verdict;

// Re-export main types at crate root
pub use cache::{BoundedCache, CacheStats};
pub use config::MatcherConfig;
pub use error::{MatchError, Result};
pub use matcher::{Matcher, MatcherStats, Score};
pub use verdict::Verdict;

static GLOBAL: OnceLock<Matcher> = OnceLock::new();

/// Shared matcher, built on first use from [`MatcherConfig::from_env`].
///
/// An invalid environment configuration is logged and replaced by the
/// defaults.
pub fn global() -> &'static Matcher {
    GLOBAL.get_or_init(|| {
        let config = MatcherConfig::from_env();
        Matcher::with_config(config).unwrap_or_else(|err| {
            warn!(error = %err, "falling back to default matcher configuration");
            Matcher::new()
        })
    })
}

/// Normalize using the global matcher's cache
pub fn normalize(input: &str) -> String {
    global().normalize(input)
}

pub fn similarity(a: &str, b: &str) -> Score {
    global().similarity(a, b)
}

pub fn fuzzy_match(input: &str, target: &str) -> bool {
    global().fuzzy_match(input, target)
}

pub fn contains_fuzzy_match(input: &str, target: &str) -> bool {
    global().contains_fuzzy_match(input, target)
}

pub fn validate_words(input: &str, correct_answer: &str) -> Vec<bool> {
    global().validate_words(input, correct_answer)
}
