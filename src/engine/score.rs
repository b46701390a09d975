// Scoring math — length-normalized match density.
//
// The "confidence" produced here is NOT a calibrated probability. It is
// the match count normalized by word count, scaled so that one match in
// a ten-word text saturates the base score, then multiplied by the
// dial's sensitivity. Short text with matches scores higher than long
// text with the same matches.

use crate::models::Severity;

/// Confidence above this is a detection. Exactly 0.3 is NOT detected.
pub const DETECTION_THRESHOLD: f64 = 0.3;

/// Fixed multiplier for the dedicated custom-blocked-terms pass,
/// independent of the dial's own sensitivity.
pub const CUSTOM_BLOCKED_MULTIPLIER: f64 = 1.5;

/// Scoring outcome for one category (before it is attached to a name).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub detected: bool,
    pub confidence: f64,
    pub severity: Severity,
}

/// Whitespace-delimited word count, floored at 1 so empty text cannot
/// divide by zero.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count().max(1)
}

/// Round to 3 decimal places — the precision of every score field in
/// the verdict.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Score a category from its match count.
///
/// `base = min(matches / words * 10, 1.0)` then
/// `confidence = min(base * multiplier, 1.0)`, rounded to 3 decimals.
pub fn score_matches(match_count: usize, words: usize, multiplier: f64) -> Score {
    let words = words.max(1);
    let base = (match_count as f64 / words as f64 * 10.0).min(1.0);
    let confidence = round3((base * multiplier).min(1.0));
    Score {
        detected: confidence > DETECTION_THRESHOLD,
        confidence,
        severity: Severity::from_confidence(confidence),
    }
}

/// Mean confidence across produced category results, rounded to 3
/// decimals. Zero results is treated as a single implicit
/// zero-confidence result.
pub fn overall_score(confidences: &[f64]) -> f64 {
    if confidences.is_empty() {
        return 0.0;
    }
    round3(confidences.iter().sum::<f64>() / confidences.len() as f64)
}
