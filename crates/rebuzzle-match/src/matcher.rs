//! Matcher - memoized string similarity for guess checking
//!
//! Scores are percentages in `[0, 100]`:
//!
//! ```text
//! score = (max_len - distance) * 100 / max_len
//! ```
//!
//! where both lengths and the edit distance are taken over the normalized
//! strings. Two strings that normalize to the same value score 100.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cache::{BoundedCache, CacheStats};
use crate::config::{MatcherConfig, DEFAULT_NORMALIZE_CAPACITY, DEFAULT_SIMILARITY_CAPACITY};
use crate::distance::levenshtein;
use crate::error::Result;
use crate::normalize::{self, words};

/// Similarity percentage in `[0, 100]`
pub type Score = f64;

const NORMALIZE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_NORMALIZE_CAPACITY) {
    Some(n) => n,
    None => panic!("default normalize capacity must be non-zero"),
};

const SIMILARITY_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_SIMILARITY_CAPACITY) {
    Some(n) => n,
    None => panic!("default similarity capacity must be non-zero"),
};

/// Cache occupancy and counters for both memo tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherStats {
    pub normalize: CacheStats,
    pub similarity: CacheStats,
}

/// Thread-safe similarity matcher with bounded memoization.
///
/// Owns a normalization cache (input -> normalized form) and a similarity
/// cache keyed by the unordered pair of normalized strings, so `(a, b)` and
/// `(b, a)` share one entry. Caching never changes a result.
pub struct Matcher {
    config: MatcherConfig,
    normalized: BoundedCache<String, String>,
    similarities: BoundedCache<(String, String), Score>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    /// Create a matcher with the default configuration
    pub fn new() -> Self {
        Self {
            config: MatcherConfig::default(),
            normalized: BoundedCache::with_capacity("normalize", NORMALIZE_CAPACITY),
            similarities: BoundedCache::with_capacity("similarity", SIMILARITY_CAPACITY),
        }
    }

    /// Create a matcher with custom configuration
    pub fn with_config(config: MatcherConfig) -> Result<Self> {
        config.validate()?;

        debug!(
            normalize_capacity = config.normalize_capacity,
            similarity_capacity = config.similarity_capacity,
            default_threshold = config.default_threshold,
            "creating matcher"
        );

        Ok(Self {
            normalized: BoundedCache::new("normalize", config.normalize_capacity)?,
            similarities: BoundedCache::new("similarity", config.similarity_capacity)?,
            config,
        })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Threshold used by the operations that do not take one explicitly
    pub fn default_threshold(&self) -> Score {
        self.config.default_threshold
    }

    /// Normalize `input`, consulting the normalization cache
    pub fn normalize(&self, input: &str) -> String {
        if let Some(hit) = self.normalized.get(input) {
            return hit;
        }

        let normalized = normalize::normalize(input);
        self.normalized.insert(input.to_string(), normalized.clone());
        normalized
    }

    /// Similarity of two strings as a percentage.
    ///
    /// Byte-identical inputs return 100 without normalizing. Strings whose
    /// lengths differ by more than half of the longer one get an approximate
    /// (lower bound) score; see [`crate::distance`].
    pub fn similarity(&self, a: &str, b: &str) -> Score {
        if a == b {
            return 100.0;
        }

        let a = self.normalize(a);
        let b = self.normalize(b);
        if a == b {
            return 100.0;
        }

        let key = pair_key(a, b);
        if let Some(score) = self.similarities.get(&key) {
            return score;
        }

        let score = score_normalized(&key.0, &key.1);
        trace!(a = %key.0, b = %key.1, score, "computed similarity");

        self.similarities.insert(key, score);
        score
    }

    /// `similarity(input, target) >= default_threshold`
    pub fn fuzzy_match(&self, input: &str, target: &str) -> bool {
        self.fuzzy_match_with_threshold(input, target, self.config.default_threshold)
    }

    /// `similarity(input, target) >= threshold`.
    ///
    /// `threshold` is not range-checked: above 100 nothing matches, at or
    /// below 0 everything does.
    pub fn fuzzy_match_with_threshold(&self, input: &str, target: &str, threshold: Score) -> bool {
        self.similarity(input, target) >= threshold
    }

    /// True if normalized `input` contains normalized `target`, otherwise
    /// falls back to [`fuzzy_match`](Self::fuzzy_match) on the whole strings
    pub fn contains_fuzzy_match(&self, input: &str, target: &str) -> bool {
        self.contains_fuzzy_match_with_threshold(input, target, self.config.default_threshold)
    }

    pub fn contains_fuzzy_match_with_threshold(
        &self,
        input: &str,
        target: &str,
        threshold: Score,
    ) -> bool {
        let haystack = self.normalize(input);
        let needle = self.normalize(target);
        if haystack.contains(needle.as_str()) {
            return true;
        }

        self.fuzzy_match_with_threshold(input, target, threshold)
    }

    /// Per-word correctness of `input` against `correct_answer`.
    ///
    /// One entry per non-empty word of the normalized input, in order. A word
    /// is correct if it appears verbatim among the answer's words, or
    /// fuzzy-matches any one of them. No positional alignment is done.
    pub fn validate_words(&self, input: &str, correct_answer: &str) -> Vec<bool> {
        self.validate_words_with_threshold(input, correct_answer, self.config.default_threshold)
    }

    pub fn validate_words_with_threshold(
        &self,
        input: &str,
        correct_answer: &str,
        threshold: Score,
    ) -> Vec<bool> {
        let input = self.normalize(input);
        let answer = self.normalize(correct_answer);

        let answer_words: Vec<&str> = words(&answer).collect();
        let answer_set: HashSet<&str> = answer_words.iter().copied().collect();

        words(&input)
            .map(|word| {
                answer_set.contains(word)
                    || answer_words
                        .iter()
                        .any(|candidate| self.fuzzy_match_with_threshold(word, candidate, threshold))
            })
            .collect()
    }

    /// Drop all memoized entries and reset counters
    pub fn clear(&self) {
        self.normalized.clear();
        self.similarities.clear();
        debug!("matcher caches cleared");
    }

    pub fn stats(&self) -> MatcherStats {
        MatcherStats {
            normalize: self.normalized.stats(),
            similarity: self.similarities.stats(),
        }
    }
}

/// Order-independent cache key for a pair of normalized strings
fn pair_key(a: String, b: String) -> (String, String) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Score two distinct normalized strings
fn score_normalized(a: &str, b: &str) -> Score {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }

    let distance = levenshtein(a, b).min(max_len);
    // Multiply first so whole percentages (85, 90, ...) stay exact
    (max_len - distance) as f64 * 100.0 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_is_order_independent() {
        assert_eq!(
            pair_key("b".to_string(), "a".to_string()),
            pair_key("a".to_string(), "b".to_string())
        );
    }

    #[test]
    fn test_score_normalized() {
        assert_eq!(score_normalized("cat", "dog"), 0.0);
        assert_eq!(score_normalized("", ""), 100.0);
        assert_eq!(score_normalized("abcd", "abce"), 75.0);
    }

    #[test]
    fn test_exact_input_skips_normalization() {
        let matcher = Matcher::new();
        assert_eq!(matcher.similarity("Hello!", "Hello!"), 100.0);
        assert_eq!(matcher.stats().normalize.len, 0);
    }

    #[test]
    fn test_normalized_equal_skips_similarity_cache() {
        let matcher = Matcher::new();
        assert_eq!(matcher.similarity("Hello, World", "hello world!"), 100.0);
        assert_eq!(matcher.stats().similarity.len, 0);
        assert_eq!(matcher.stats().normalize.len, 2);
    }

    #[test]
    fn test_with_config_rejects_zero_capacity() {
        let config = MatcherConfig {
            normalize_capacity: 0,
            ..Default::default()
        };
        assert!(Matcher::with_config(config).is_err());
    }

    #[test]
    fn test_default_threshold_from_config() {
        let matcher = Matcher::with_config(MatcherConfig {
            default_threshold: 80.0,
            ..Default::default()
        })
        .unwrap();

        // "qick" vs "quick" scores exactly 80
        assert!(matcher.fuzzy_match("qick", "quick"));
        assert!(!Matcher::new().fuzzy_match("qick", "quick"));
    }
}
