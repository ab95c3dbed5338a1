//! Guess/answer normalization
//!
//! Canonical form used for every comparison: lowercase, only letters, digits
//! and single spaces, no leading or trailing whitespace.

/// Normalize a string for comparison.
///
/// Lowercases, drops every character that is neither alphanumeric nor
/// whitespace, trims, and collapses whitespace runs to a single space.
/// Pure and idempotent; this is the uncached form used by
/// [`Matcher::normalize`](crate::Matcher::normalize).
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            // Leading whitespace never becomes a separator
            pending_space = !out.is_empty();
            continue;
        }
        if !c.is_alphanumeric() {
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    out
}

/// Split a normalized string into its words
#[inline]
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|w| !w.is_empty())
}
