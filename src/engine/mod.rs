// Moderation engine — the one public operation: moderate().
//
// Pure function of (catalog, dial table, request): no internal state
// carries between calls, so one engine can be shared across threads
// freely. The pipeline per request:
//
//   1. resolve the dial config (validates the level first)
//   2. build effective rule sets per active category: catalog rules +
//      one literal-term rule per custom blocked term, with match
//      occurrences post-filtered against the allow-list union
//   3. score each category (match density x dial multiplier)
//   4. dedicated custom-blocked pass over the whole text (fixed 1.5x)
//   5. aggregate flagged/overall_score
//   6. if flagged, redact on the original text: active categories in
//      canonical order, rule order within category, custom pass last

pub mod redact;
pub mod score;

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use crate::catalog::matcher::{Matcher, TermRule};
use crate::catalog::RuleCatalog;
use crate::dial::{DialConfig, DialTable};
use crate::error::ModerationError;
use crate::models::{CategoryResult, ModerationRequest, ModerationVerdict};

/// Name of the synthetic category appended when custom blocked terms
/// are detected.
pub const CUSTOM_BLOCKED_CATEGORY: &str = "custom_blocked";

/// The moderation engine. Construct once at startup; read-only after.
pub struct ModerationEngine {
    catalog: RuleCatalog,
    dials: DialTable,
    redaction_char: char,
}

impl ModerationEngine {
    pub fn new() -> Self {
        Self::with_redaction_char(redact::DEFAULT_REDACTION_CHAR)
    }

    pub fn with_redaction_char(redaction_char: char) -> Self {
        ModerationEngine {
            catalog: RuleCatalog::new(),
            dials: DialTable::new(),
            redaction_char,
        }
    }

    /// All dial presets in level order — the introspection contract for
    /// metadata endpoints and the CLI dial table.
    pub fn dial_configs(&self) -> Vec<(u8, &DialConfig)> {
        self.dials.list()
    }

    /// Score a request and produce the verdict.
    ///
    /// The only error is `InvalidDialLevel`; malformed custom terms are
    /// skipped silently and a degraded rule never fails the request.
    pub fn moderate(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationVerdict, ModerationError> {
        let started = Instant::now();

        // Dial validation comes before any catalog work — a bad level
        // is a caller error, not a catalog error.
        let config = self.dials.config(request.dial)?;

        let blocked_terms = sanitize_terms(&request.custom_blocked_terms);
        let blocked_rules: Vec<TermRule> = blocked_terms
            .iter()
            .filter_map(|t| TermRule::new(t))
            .collect();

        // Allow-list union: the dial's permanent terms + per-request
        // custom allows. Suppression is a post-filter on the matched
        // text, so allowing one term never disables the rest of a
        // category's coverage.
        let mut allowed: HashSet<String> = config.allowed_terms.clone();
        allowed.extend(sanitize_terms(&request.custom_allowed_terms));

        let words = score::word_count(&request.text);
        let mut results: Vec<CategoryResult> = Vec::new();
        let mut redaction_spans: Vec<(usize, usize)> = Vec::new();

        // Score each active category over its effective rule set.
        // Collection order fixes the documented redaction order.
        for &category in &config.active_categories {
            let mut match_count = 0usize;

            for rule in self.catalog.rules_for(category) {
                for span in rule.find_matches(&request.text) {
                    if allowed.contains(&span.text.to_lowercase()) {
                        continue;
                    }
                    match_count += 1;
                    redaction_spans.push((span.start, span.end));
                }
            }

            // Custom blocked terms join every active category's
            // effective rule set; an allowed term suppresses its own
            // blocked rule here (exclusive-match removal).
            for rule in &blocked_rules {
                for span in rule.find_matches(&request.text) {
                    if allowed.contains(&span.text.to_lowercase()) {
                        continue;
                    }
                    match_count += 1;
                }
            }

            let s = score::score_matches(match_count, words, config.sensitivity_multiplier);
            results.push(CategoryResult {
                category: category.as_str().to_string(),
                detected: s.detected,
                confidence: s.confidence,
                severity: s.severity,
            });
        }

        // Dedicated custom-blocked pass: whole text, fixed multiplier,
        // no allow-list — custom blocks always count and always redact.
        if !blocked_rules.is_empty() {
            let mut custom_count = 0usize;
            for rule in &blocked_rules {
                for span in rule.find_matches(&request.text) {
                    custom_count += 1;
                    redaction_spans.push((span.start, span.end));
                }
            }

            let s = score::score_matches(custom_count, words, score::CUSTOM_BLOCKED_MULTIPLIER);
            if s.detected {
                results.push(CategoryResult {
                    category: CUSTOM_BLOCKED_CATEGORY.to_string(),
                    detected: true,
                    confidence: s.confidence,
                    severity: s.severity,
                });
            }
        }

        let flagged = results.iter().any(|r| r.detected);
        let confidences: Vec<f64> = results.iter().map(|r| r.confidence).collect();
        let overall = score::overall_score(&confidences);

        let redacted_text = if flagged {
            Some(redact::apply_spans(
                &request.text,
                &redaction_spans,
                self.redaction_char,
            ))
        } else {
            None
        };

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        debug!(
            dial = request.dial,
            flagged,
            overall,
            categories = results.len(),
            "Moderation complete"
        );

        Ok(ModerationVerdict {
            flagged,
            overall_score: overall,
            dial_level: request.dial,
            dial_name: config.name.to_string(),
            categories: results,
            redacted_text,
            timestamp: Utc::now().to_rfc3339(),
            processing_time_ms: (elapsed_ms * 100.0).round() / 100.0,
        })
    }
}

impl Default for ModerationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-fold, trim, dedup, and drop empty custom term entries. An empty
/// term is malformed input recovered by skipping, never an error.
fn sanitize_terms(terms: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for term in terms {
        let folded = term.trim().to_lowercase();
        if folded.is_empty() {
            debug!("Skipping empty custom term");
            continue;
        }
        if seen.insert(folded.clone()) {
            out.push(folded);
        }
    }
    out
}
