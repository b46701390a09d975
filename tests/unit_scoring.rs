// Unit tests for the scoring math and redaction primitives.
//
// Tests isolated pure functions: score_matches boundary conditions
// (detection threshold, saturation, rounding), overall_score averaging,
// apply_spans masking, and truncate_chars UTF-8 safety.

use sift::engine::redact::apply_spans;
use sift::engine::score::{overall_score, round3, score_matches, word_count};
use sift::models::Severity;
use sift::output::truncate_chars;

// ============================================================
// score_matches — detection threshold boundaries
// ============================================================

#[test]
fn confidence_just_above_threshold_detects() {
    // 4 matches / 100 words * 10 = 0.4
    let s = score_matches(4, 100, 1.0);
    assert_eq!(s.confidence, 0.4);
    assert!(s.detected);
    assert_eq!(s.severity, Severity::Medium);
}

#[test]
fn confidence_exactly_at_threshold_does_not_detect() {
    let s = score_matches(3, 100, 1.0);
    assert_eq!(s.confidence, 0.3);
    assert!(!s.detected);
}

#[test]
fn confidence_just_below_threshold_is_low_severity() {
    let s = score_matches(2, 100, 1.0);
    assert_eq!(s.confidence, 0.2);
    assert!(!s.detected);
    assert_eq!(s.severity, Severity::Low);
}

#[test]
fn multiplier_pushes_borderline_over_threshold() {
    // 0.25 base: below threshold at 1.0, above at 1.5
    let balanced = score_matches(1, 40, 1.0);
    let strict = score_matches(1, 40, 1.5);
    assert!(!balanced.detected);
    assert!(strict.detected);
    assert_eq!(strict.confidence, 0.375);
}

#[test]
fn multiplier_below_one_relaxes_detection() {
    let s = score_matches(5, 100, 0.5);
    assert_eq!(s.confidence, 0.25);
    assert!(!s.detected);
}

// ============================================================
// score_matches — saturation and degenerate inputs
// ============================================================

#[test]
fn base_score_saturates_at_one() {
    // Far more matches than words still caps at 1.0
    let s = score_matches(1000, 5, 1.0);
    assert_eq!(s.confidence, 1.0);
    assert_eq!(s.severity, Severity::High);
}

#[test]
fn zero_words_is_treated_as_one() {
    let s = score_matches(1, 0, 1.0);
    assert_eq!(s.confidence, 1.0);
}

#[test]
fn zero_matches_never_detects_regardless_of_multiplier() {
    for multiplier in [0.5, 1.0, 1.5, 100.0] {
        let s = score_matches(0, 10, multiplier);
        assert_eq!(s.confidence, 0.0);
        assert!(!s.detected);
    }
}

// ============================================================
// rounding and averaging
// ============================================================

#[test]
fn round3_half_up() {
    assert_eq!(round3(0.0005), 0.001);
    assert_eq!(round3(0.1114), 0.111);
}

#[test]
fn repeating_fraction_rounds_to_three_decimals() {
    // 2 matches / 30 words * 10 = 0.666...
    let s = score_matches(2, 30, 1.0);
    assert_eq!(s.confidence, 0.667);
    assert_eq!(s.severity, Severity::High);
}

#[test]
fn overall_score_averages_and_rounds() {
    assert_eq!(overall_score(&[1.0, 0.0, 0.0, 0.0]), 0.25);
    assert_eq!(overall_score(&[0.333, 0.333]), 0.333);
    assert_eq!(overall_score(&[1.0]), 1.0);
}

#[test]
fn overall_score_empty_is_zero() {
    assert_eq!(overall_score(&[]), 0.0);
}

// ============================================================
// word_count
// ============================================================

#[test]
fn word_count_splits_on_any_whitespace() {
    assert_eq!(word_count("one\ttwo\nthree  four"), 4);
}

#[test]
fn word_count_empty_floors_at_one() {
    assert_eq!(word_count(""), 1);
    assert_eq!(word_count(" \n\t "), 1);
}

// ============================================================
// apply_spans — redaction masking
// ============================================================

#[test]
fn redaction_preserves_char_length() {
    let text = "you total idiot";
    let out = apply_spans(text, &[(10, 15)], '*');
    assert_eq!(out, "you total *****");
    assert_eq!(out.chars().count(), text.chars().count());
}

#[test]
fn duplicate_spans_redact_once() {
    let out = apply_spans("bad word", &[(0, 3), (0, 3)], '*');
    assert_eq!(out, "*** word");
}

#[test]
fn redacting_redacted_text_changes_nothing() {
    let once = apply_spans("some shit here", &[(5, 9)], '*');
    let twice = apply_spans(&once, &[(5, 9)], '*');
    assert_eq!(once, twice);
}

#[test]
fn adjacent_spans_merge_visually() {
    let out = apply_spans("abcdef", &[(0, 3), (3, 6)], '*');
    assert_eq!(out, "******");
}

// ============================================================
// truncate_chars — UTF-8 safe truncation
// ============================================================

#[test]
fn truncate_within_limit() {
    assert_eq!(truncate_chars("hello", 10), "hello");
}

#[test]
fn truncate_over_limit_appends_ellipsis() {
    assert_eq!(truncate_chars("hello!", 5), "hello...");
}

#[test]
fn truncate_emoji_safe() {
    let text = "Hello 🌍!";
    let result = truncate_chars(text, 7);
    assert_eq!(result, "Hello 🌍...");
}
