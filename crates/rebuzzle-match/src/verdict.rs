//! Answer verdicts
//!
//! Combines the whole-answer decision with per-word highlight feedback, the
//! shape the guess box renders after a submission.

use serde::{Deserialize, Serialize};

use crate::matcher::{Matcher, Score};

/// Outcome of checking a guess against a puzzle answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Normalized guess
    pub guess: String,
    /// Normalized answer
    pub answer: String,
    /// Whole-string similarity percentage
    pub score: Score,
    /// Threshold the decision was made against
    pub threshold: Score,
    /// Guess and answer normalize to the same string
    pub exact: bool,
    /// Guess accepted
    pub correct: bool,
    /// Per-word correctness of the guess, one entry per guess word
    pub words: Vec<bool>,
}

impl Verdict {
    /// Number of guess words that matched some answer word
    pub fn matched_words(&self) -> usize {
        self.words.iter().filter(|&&ok| ok).count()
    }
}

impl Matcher {
    /// Check a guess using the configured default threshold
    pub fn verdict(&self, guess: &str, answer: &str) -> Verdict {
        self.verdict_with_threshold(guess, answer, self.default_threshold())
    }

    /// Check a guess: exact after normalization, otherwise fuzzy on the
    /// whole string
    pub fn verdict_with_threshold(&self, guess: &str, answer: &str, threshold: Score) -> Verdict {
        let normalized_guess = self.normalize(guess);
        let normalized_answer = self.normalize(answer);
        let exact = normalized_guess == normalized_answer;

        let score = self.similarity(guess, answer);
        let correct = exact || score >= threshold;
        let words = self.validate_words_with_threshold(guess, answer, threshold);

        Verdict {
            guess: normalized_guess,
            answer: normalized_answer,
            score,
            threshold,
            exact,
            correct,
            words,
        }
    }
}
