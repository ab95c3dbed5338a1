//! Levenshtein edit distance
//!
//! Insertions, deletions and substitutions each cost 1. Computed over
//! Unicode scalar values with a single rolling row sized to the shorter input.
//!
//! # Length short-circuit
//!
//! When the length difference exceeds half of the longer length, the DP is
//! skipped and the longer length is returned as an upper bound. Such pairs
//! can never score above 50% similarity, so this only changes how low the
//! score of an already-rejected pair is. Scores for those pairs are
//! approximate and callers must not rely on them being exact.

use tracing::trace;

/// Edit distance between two strings, with the length short-circuit applied
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let max_len = a.len().max(b.len());
    let diff = a.len().abs_diff(b.len());
    // diff > 0.5 * max_len, in integers
    if diff * 2 > max_len {
        trace!(
            len_a = a.len(),
            len_b = b.len(),
            "length difference too large, skipping edit distance"
        );
        return max_len;
    }

    levenshtein_chars(&a, &b)
}

/// Exact edit distance over char slices, O(min(m, n)) extra space
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    // Row runs over the shorter input
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, &lc) in long.iter().enumerate() {
        // row[0] before overwrite is the diagonal for j = 1
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(lc != sc);
            row[j + 1] = (above + 1) // deletion
                .min(row[j] + 1) // insertion
                .min(diag + cost); // substitution
            diag = above;
        }
    }

    row[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identical() {
        assert_eq!(levenshtein("sunflower", "sunflower"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn test_empty_side() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abcd", ""), 4);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(levenshtein("sunfower", "sunflower"), 1);
        assert_eq!(levenshtein("cat", "cut"), 1);
        assert_eq!(levenshtein("cats", "cat"), 1);
    }

    #[test]
    fn test_classic_pairs() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("cat", "dog"), 3);
        // Transposition costs two substitutions
        assert_eq!(levenshtein("teh", "the"), 2);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(levenshtein("kitten", "sitting"), levenshtein("sitting", "kitten"));
        assert_eq!(levenshtein("abc", "ab"), levenshtein("ab", "abc"));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本人"), 1);
    }

    #[test]
    fn test_length_short_circuit_is_an_upper_bound() {
        // diff 4 > 0.5 * 6: exact distance is 4, reported as 6
        assert_eq!(levenshtein_chars(&chars("ab"), &chars("abcdef")), 4);
        assert_eq!(levenshtein("ab", "abcdef"), 6);
        assert_eq!(levenshtein("abcdef", "ab"), 6);
    }

    #[test]
    fn test_length_short_circuit_boundary() {
        // diff 2 == 0.5 * 4: not strictly greater, DP runs
        assert_eq!(levenshtein("ab", "abcd"), 2);
        // diff 3 > 0.5 * 5
        assert_eq!(levenshtein("ab", "abcde"), 5);
    }

    #[test]
    fn test_chars_matches_str_within_bound() {
        for (a, b) in [("kitten", "sitting"), ("saturday", "sunday"), ("abc", "yabd")] {
            assert_eq!(levenshtein(a, b), levenshtein_chars(&chars(a), &chars(b)));
        }
    }
}
