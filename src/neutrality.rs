//! Heuristic neutrality scoring for rewritten news text.
//!
//! Compares an original article text against its neutralized rewrite
//! and produces a 0–100 score (higher is more neutral). Three signals:
//!
//! 1. **Emotional language** — charged patterns in the *original* text
//!    (each match counts against the score).
//! 2. **Neutral language** — factual/hedged patterns in the *rewrite*
//!    (each match counts in favour).
//! 3. **Structural bias** — per-sentence drift between original and
//!    rewrite: large length changes suggest editorialisation, and
//!    dropped or added quotes are penalised heavily.
//!
//! This is a fast single-pass heuristic, not a classifier; thresholds
//! and weights are tuned constants.

use regex::Regex;

/// Points per pattern match in either direction.
const PATTERN_MATCH_POINTS: f64 = 10.0;

/// Cap on the per-sentence length-drift penalty.
const LENGTH_DRIFT_CAP: f64 = 20.0;

/// Penalty per dropped or added quote in a sentence pair.
const QUOTE_DRIFT_POINTS: f64 = 15.0;

/// Emotionally charged language, matched against the original text.
const EMOTIONAL_PATTERNS: &[&str] = &[
    // intensifiers
    r"(?i)\b(very|extremely|incredibly|absolutely|totally)\b",
    // superlatives
    r"(?i)\b(best|worst|most|least|greatest|tiniest)\b",
    // emotive verbs
    r"(?i)\b(slammed|blasted|ripped|destroyed|dominated)\b",
    // biased adjectives
    r"(?i)\b(terrible|amazing|awesome|horrible|perfect)\b",
    // politically loaded labels
    r"(?i)\b(radical|socialist|communist|fascist|leftist|rightist)\b",
];

/// Neutral/factual language, matched against the rewritten text.
const NEUTRAL_PATTERNS: &[&str] = &[
    // factual verbs
    r"(?i)\b(stated|reported|announced|explained|described)\b",
    // measurement words
    r"(?i)\b(approximately|estimated|about|roughly|nearly)\b",
    // qualifiers
    r"(?i)\b(potentially|possibly|likely|according to|suggests)\b",
];

/// Quoted spans, used for quote-preservation checks.
const QUOTE_PATTERN: &str = r#""([^"]*)""#;

/// Component scores from one neutrality evaluation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct NeutralityMetrics {
    /// Emotional-language points found in the original text.
    pub emotional_score: f64,
    /// Neutral-language points found in the rewritten text.
    pub neutral_score: f64,
    /// Structural drift points between the two texts.
    pub bias_score: f64,
    /// Composite 0–100 score; higher means more neutral.
    pub final_score: u8,
}

impl NeutralityMetrics {
    fn zero() -> Self {
        Self {
            emotional_score: 0.0,
            neutral_score: 0.0,
            bias_score: 0.0,
            final_score: 0,
        }
    }
}

/// Score how neutral a rewrite is relative to its original.
///
/// Either input being empty yields all-zero metrics (nothing to
/// compare). The final score is
/// `clamp(100 − (emotional − neutral + bias), 0, 100)`, rounded.
pub fn neutrality_score(original: &str, neutral: &str) -> NeutralityMetrics {
    if original.is_empty() || neutral.is_empty() {
        return NeutralityMetrics::zero();
    }

    let emotional_score = pattern_points(EMOTIONAL_PATTERNS, original);
    let neutral_score = pattern_points(NEUTRAL_PATTERNS, neutral);
    let bias_score = structural_bias(original, neutral);

    let raw = 100.0 - (emotional_score - neutral_score + bias_score);
    let final_score = raw.clamp(0.0, 100.0).round() as u8;

    NeutralityMetrics {
        emotional_score,
        neutral_score,
        bias_score,
        final_score,
    }
}

/// Map a neutrality score to a display label.
pub fn neutrality_label(score: u8) -> &'static str {
    match score {
        90..=u8::MAX => "Highly Neutral",
        80..=89 => "Very Neutral",
        70..=79 => "Moderately Neutral",
        60..=69 => "Somewhat Neutral",
        _ => "Minimally Neutral",
    }
}

fn pattern_points(patterns: &[&str], text: &str) -> f64 {
    patterns
        .iter()
        .map(|pattern| {
            if let Ok(re) = Regex::new(pattern) {
                re.find_iter(text).count() as f64 * PATTERN_MATCH_POINTS
            } else {
                0.0
            }
        })
        .sum()
}

/// Compare aligned sentence pairs for length drift and quote loss.
///
/// Sentences beyond the shorter text contribute nothing — a rewrite
/// that drops trailing sentences is caught by the per-pair drift on
/// the sentences that remain.
fn structural_bias(original: &str, neutral: &str) -> f64 {
    let original_sentences: Vec<&str> = split_sentences(original);
    let neutral_sentences: Vec<&str> = split_sentences(neutral);

    let quote_re = Regex::new(QUOTE_PATTERN).ok();

    let mut score = 0.0;
    for (idx, sentence) in original_sentences.iter().enumerate() {
        let Some(counterpart) = neutral_sentences.get(idx) else {
            break;
        };

        let original_len = sentence.chars().count() as f64;
        let counterpart_len = counterpart.chars().count() as f64;
        let length_drift = (original_len - counterpart_len).abs();
        score += (length_drift / original_len * 50.0).min(LENGTH_DRIFT_CAP);

        if let Some(re) = &quote_re {
            let original_quotes = re.find_iter(sentence).count() as i64;
            let neutral_quotes = re.find_iter(counterpart).count() as i64;
            score += (original_quotes - neutral_quotes).unsigned_abs() as f64 * QUOTE_DRIFT_POINTS;
        }
    }
    score
}

fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_yield_zero_metrics() {
        let metrics = neutrality_score("", "some rewrite");
        assert_eq!(metrics.final_score, 0);
        let metrics = neutrality_score("some original", "");
        assert_eq!(metrics.final_score, 0);
    }

    #[test]
    fn identical_plain_texts_score_high() {
        let text = "The senator introduced a bill on Tuesday";
        let metrics = neutrality_score(text, text);
        assert_eq!(metrics.final_score, 100);
        assert!(metrics.bias_score.abs() < f64::EPSILON);
    }

    #[test]
    fn emotional_language_counts_against() {
        let metrics = neutrality_score(
            "The senator absolutely destroyed the terrible bill",
            "The senator opposed the bill",
        );
        // absolutely + destroyed + terrible = 3 matches × 10.
        assert!((metrics.emotional_score - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn neutral_language_counts_in_favour() {
        let metrics = neutrality_score(
            "The senator spoke on the bill",
            "The senator reportedly stated that approximately forty members likely agree",
        );
        // stated + approximately + likely = 3 matches × 10.
        assert!((metrics.neutral_score - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pattern_matching_is_case_insensitive() {
        let metrics = neutrality_score(
            "An ABSOLUTELY Radical proposal",
            "A proposal was announced",
        );
        assert!((metrics.emotional_score - 20.0).abs() < f64::EPSILON);
        assert!((metrics.neutral_score - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dropped_quote_penalised() {
        let metrics = neutrality_score(
            r#"He said "this is fine" to the press"#,
            "He made a remark to the press about",
        );
        // Same sentence lengths would still differ a little; quote loss
        // alone contributes 15 points of bias.
        assert!(metrics.bias_score >= QUOTE_DRIFT_POINTS);
    }

    #[test]
    fn preserved_quote_not_penalised() {
        let text = r#"He said "this is fine" to the press"#;
        let metrics = neutrality_score(text, text);
        assert!(metrics.bias_score.abs() < f64::EPSILON);
    }

    #[test]
    fn length_drift_capped_per_sentence() {
        let original = "Short";
        let rewrite = "A very long rewrite that bears no resemblance to the original sentence at all";
        let metrics = neutrality_score(original, rewrite);
        // Drift far exceeds the cap; the contribution stays at 20, but
        // the rewrite's "very" does not count (emotional patterns only
        // run against the original).
        assert!((metrics.bias_score - LENGTH_DRIFT_CAP).abs() < f64::EPSILON);
        assert!(metrics.emotional_score.abs() < f64::EPSILON);
    }

    #[test]
    fn extra_rewrite_sentences_ignored() {
        let metrics = neutrality_score(
            "One sentence here",
            "One sentence here. And a second. And a third",
        );
        // Only the first pair is compared; identical → no bias.
        assert!(metrics.bias_score.abs() < f64::EPSILON);
    }

    #[test]
    fn final_score_clamped_to_zero() {
        let original = "very very very very very very horrible horrible horrible \
                        terrible terrible radical radical worst worst absolutely";
        let metrics = neutrality_score(original, "ok");
        assert_eq!(metrics.final_score, 0);
    }

    #[test]
    fn final_score_clamped_to_hundred() {
        let metrics = neutrality_score(
            "A bill advanced",
            "Officials stated and reported and announced and explained progress",
        );
        assert_eq!(metrics.final_score, 100);
    }

    #[test]
    fn labels_match_thresholds() {
        assert_eq!(neutrality_label(95), "Highly Neutral");
        assert_eq!(neutrality_label(90), "Highly Neutral");
        assert_eq!(neutrality_label(85), "Very Neutral");
        assert_eq!(neutrality_label(75), "Moderately Neutral");
        assert_eq!(neutrality_label(65), "Somewhat Neutral");
        assert_eq!(neutrality_label(10), "Minimally Neutral");
    }
}
