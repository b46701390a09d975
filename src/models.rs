// Shared value types — the structs that flow through the engine.
//
// These are separate from the scoring pipeline so the CLI and any future
// transport layer can use them without depending on engine internals.
// Field names on the verdict types are part of the wire contract and
// must not change.

use serde::{Deserialize, Serialize};

/// A built-in content category. Fixed at build time; the catalog owns an
/// ordered rule list per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Profanity,
    Toxicity,
    HateSpeech,
    Spam,
}

impl Category {
    /// All categories in canonical order. This order drives category
    /// iteration everywhere (scoring, redaction, output) so results are
    /// deterministic.
    pub const ALL: [Category; 4] = [
        Category::Profanity,
        Category::Toxicity,
        Category::HateSpeech,
        Category::Spam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Profanity => "profanity",
            Category::Toxicity => "toxicity",
            Category::HateSpeech => "hate_speech",
            Category::Spam => "spam",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity bucket derived from the confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Bucket a confidence score. Thresholds match the detection
    /// threshold (0.3) so a non-detected category is always Low.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence < 0.3 {
            Severity::Low
        } else if confidence < 0.6 {
            Severity::Medium
        } else {
            Severity::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One moderation call. Built fresh per request and discarded after the
/// verdict is produced — the engine keeps no cross-request state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModerationRequest {
    /// Text to score. Length bounds (1..=10000 chars) are enforced by
    /// the caller; the engine scores whatever it is given.
    pub text: String,
    /// Strictness dial, 1 (strictest) to 5 (most permissive).
    pub dial: u8,
    /// Extra terms to detect and redact for this request only.
    #[serde(default)]
    pub custom_blocked_terms: Vec<String>,
    /// Terms exempted from detection and redaction for this request.
    #[serde(default)]
    pub custom_allowed_terms: Vec<String>,
}

/// Per-category outcome within a verdict.
///
/// `category` is a string rather than the `Category` enum so the
/// synthetic `custom_blocked` result shares the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: String,
    pub detected: bool,
    /// Length-normalized match density in [0, 1] — NOT a calibrated
    /// probability. Rounded to 3 decimals.
    pub confidence: f64,
    pub severity: Severity,
}

/// The complete response for one moderation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationVerdict {
    pub flagged: bool,
    /// Mean confidence across all produced category results, rounded to
    /// 3 decimals. 0.0 when no category produced a result.
    pub overall_score: f64,
    pub dial_level: u8,
    pub dial_name: String,
    pub categories: Vec<CategoryResult>,
    /// Present only when flagged: the input with every matched span
    /// replaced by an equal-length run of the redaction character.
    pub redacted_text: Option<String>,
    /// RFC 3339 timestamp of when the verdict was produced.
    pub timestamp: String,
    /// Wall-clock duration of the moderation call. Informational only —
    /// not part of verdict equality.
    pub processing_time_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_buckets() {
        assert_eq!(Severity::from_confidence(0.0), Severity::Low);
        assert_eq!(Severity::from_confidence(0.299), Severity::Low);
        assert_eq!(Severity::from_confidence(0.3), Severity::Medium);
        assert_eq!(Severity::from_confidence(0.599), Severity::Medium);
        assert_eq!(Severity::from_confidence(0.6), Severity::High);
        assert_eq!(Severity::from_confidence(1.0), Severity::High);
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::HateSpeech).unwrap();
        assert_eq!(json, "\"hate_speech\"");
    }

    #[test]
    fn category_order_is_canonical() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["profanity", "toxicity", "hate_speech", "spam"]);
    }
}
