//! Rebuzzle Answer Checker
//!
//! Runs a guess through the same matcher the game uses, for checking
//! puzzle answers while authoring.
//!
//! ## Usage
//!
//! ```bash
//! rebuzzle-check "sunfower" "sunflower"
//! rebuzzle-check --mode words --threshold 80 "teh qick fox" "the quick fox"
//! rebuzzle-check --json "piece of cake" "peace of cake"
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `REBUZZLE_MATCH_THRESHOLD`: default acceptance threshold (default: 85)
//! - `REBUZZLE_MATCH_NORMALIZE_CAPACITY`, `REBUZZLE_MATCH_SIMILARITY_CAPACITY`: cache sizes
//! - `RUST_LOG`: Logging level (default: info)

use clap::{Parser, ValueEnum};
use rebuzzle_match::{Matcher, MatcherConfig};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Full verdict: score, decision and per-word feedback
    Verdict,
    /// Similarity percentage only
    Similarity,
    /// Whole-string fuzzy match
    Match,
    /// Containment, then whole-string fuzzy match
    Contains,
    /// Per-word correctness
    Words,
}

#[derive(Debug, Parser)]
#[command(name = "rebuzzle-check", version, about = "Check a guess against a puzzle answer")]
struct Args {
    /// The player's guess
    guess: String,

    /// The canonical answer
    answer: String,

    /// Acceptance threshold percentage (overrides REBUZZLE_MATCH_THRESHOLD)
    #[arg(short, long)]
    threshold: Option<f64>,

    #[arg(short, long, value_enum, default_value_t = Mode::Verdict)]
    mode: Mode,

    /// Print JSON instead of a human-readable line
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Verdict(rebuzzle_match::Verdict),
    Score { score: f64 },
    Decision { threshold: f64, matched: bool },
    Words { threshold: f64, words: Vec<bool> },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();

    let mut config = MatcherConfig::from_env();
    if let Some(threshold) = args.threshold {
        config.default_threshold = threshold;
    }
    let matcher = Matcher::with_config(config)?;
    let threshold = matcher.default_threshold();

    debug!(mode = ?args.mode, threshold, "checking guess");

    let output = run(&matcher, &args, threshold);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", render(&output));
    }

    let stats = matcher.stats();
    info!(
        normalize_entries = stats.normalize.len,
        similarity_entries = stats.similarity.len,
        "done"
    );

    Ok(())
}

fn run(matcher: &Matcher, args: &Args, threshold: f64) -> Output {
    let (guess, answer) = (args.guess.as_str(), args.answer.as_str());
    match args.mode {
        Mode::Verdict => Output::Verdict(matcher.verdict_with_threshold(guess, answer, threshold)),
        Mode::Similarity => Output::Score {
            score: matcher.similarity(guess, answer),
        },
        Mode::Match => Output::Decision {
            threshold,
            matched: matcher.fuzzy_match_with_threshold(guess, answer, threshold),
        },
        Mode::Contains => Output::Decision {
            threshold,
            matched: matcher.contains_fuzzy_match_with_threshold(guess, answer, threshold),
        },
        Mode::Words => Output::Words {
            threshold,
            words: matcher.validate_words_with_threshold(guess, answer, threshold),
        },
    }
}

fn render(output: &Output) -> String {
    match output {
        Output::Verdict(v) => {
            let marks: Vec<&str> = v
                .guess
                .split(' ')
                .filter(|w| !w.is_empty())
                .zip(&v.words)
                .map(|(word, ok)| if *ok { word } else { "_" })
                .collect();
            format!(
                "{} ({:.1}% vs {}%) [{}]",
                if v.correct { "correct" } else { "incorrect" },
                v.score,
                v.threshold,
                marks.join(" ")
            )
        }
        Output::Score { score } => format!("{:.1}", score),
        Output::Decision { matched, .. } => matched.to_string(),
        Output::Words { words, .. } => words
            .iter()
            .map(|ok| if *ok { "1" } else { "0" })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(mode: Mode, guess: &str, answer: &str) -> Args {
        Args {
            guess: guess.to_string(),
            answer: answer.to_string(),
            threshold: None,
            mode,
            json: false,
        }
    }

    #[test]
    fn test_cli_parses() {
        let parsed = Args::try_parse_from([
            "rebuzzle-check",
            "--mode",
            "words",
            "-t",
            "80",
            "teh qick fox",
            "the quick fox",
        ])
        .unwrap();
        assert_eq!(parsed.mode, Mode::Words);
        assert_eq!(parsed.threshold, Some(80.0));
        assert_eq!(parsed.guess, "teh qick fox");
    }

    #[test]
    fn test_render_verdict_masks_wrong_words() {
        let matcher = Matcher::new();
        let out = run(&matcher, &args(Mode::Verdict, "teh quick fox", "the quick fox"), 85.0);
        assert_eq!(render(&out), "incorrect (84.6% vs 85%) [_ quick fox]");
    }

    #[test]
    fn test_render_words() {
        let matcher = Matcher::new();
        let out = run(&matcher, &args(Mode::Words, "teh qick fox", "the quick fox"), 80.0);
        assert_eq!(render(&out), "0 1 1");
    }

    #[test]
    fn test_json_decision() {
        let matcher = Matcher::new();
        let out = run(&matcher, &args(Mode::Match, "sunfower", "sunflower"), 85.0);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json, serde_json::json!({ "threshold": 85.0, "matched": true }));
    }
}
