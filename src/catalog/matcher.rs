// Matcher abstraction — "find all matches with spans".
//
// Rules are capability-abstracted behind a trait so the catalog can mix
// compiled regex patterns with dynamically-built literal-term matchers,
// and so structurally invalid patterns are rejected once at catalog
// load instead of failing per request.

use regex_lite::Regex;
use tracing::warn;

/// One match occurrence: byte offsets into the original text plus the
/// exact matched text (needed for allow-list filtering and redaction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// A stateless text-matching predicate. Evaluations never fail; a rule
/// that matches nothing returns an empty vec.
pub trait Matcher: Send + Sync {
    /// Find every non-overlapping match in `text`, in document order.
    fn find_matches(&self, text: &str) -> Vec<MatchSpan>;
}

/// A catalog rule backed by a compiled case-insensitive regex.
pub struct RegexRule {
    regex: Regex,
}

impl RegexRule {
    /// Compile a pattern, forcing case-insensitivity. Returns None (and
    /// logs) if the pattern is structurally invalid — the catalog skips
    /// it rather than aborting.
    pub fn compile(pattern: &str) -> Option<RegexRule> {
        match Regex::new(&format!("(?i){pattern}")) {
            Ok(regex) => Some(RegexRule { regex }),
            Err(e) => {
                warn!(pattern, error = %e, "Skipping invalid catalog pattern");
                None
            }
        }
    }
}

impl Matcher for RegexRule {
    fn find_matches(&self, text: &str) -> Vec<MatchSpan> {
        self.regex
            .find_iter(text)
            .map(|m| MatchSpan {
                start: m.start(),
                end: m.end(),
                text: m.as_str().to_string(),
            })
            .collect()
    }
}

/// A literal whole-term matcher, case-insensitive.
///
/// Used for custom blocked terms: the term is matched verbatim, never
/// interpreted as regex syntax, so user input like "c++" can't produce
/// a malformed pattern. Word boundaries follow `\b` semantics (word
/// char = ASCII alphanumeric or underscore).
pub struct TermRule {
    term: Vec<char>,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl TermRule {
    /// Build a matcher for a literal term. Returns None for empty or
    /// whitespace-only terms — malformed entries are skipped, not
    /// errored.
    pub fn new(term: &str) -> Option<TermRule> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(TermRule {
            term: trimmed.chars().map(fold).collect(),
        })
    }
}

impl Matcher for TermRule {
    fn find_matches(&self, text: &str) -> Vec<MatchSpan> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let n = chars.len();
        let len = self.term.len();
        let mut spans = Vec::new();

        let mut i = 0;
        while i + len <= n {
            // Word boundary before the candidate position
            if i > 0 && is_word_char(chars[i - 1].1) {
                i += 1;
                continue;
            }
            let matched = (0..len).all(|j| fold(chars[i + j].1) == self.term[j]);
            // Word boundary after
            let bounded = matched && (i + len == n || !is_word_char(chars[i + len].1));
            if bounded {
                let start = chars[i].0;
                let end = if i + len < n {
                    chars[i + len].0
                } else {
                    text.len()
                };
                let text_match: String = chars[i..i + len].iter().map(|(_, c)| *c).collect();
                spans.push(MatchSpan {
                    start,
                    end,
                    text: text_match,
                });
                i += len;
            } else {
                i += 1;
            }
        }

        spans
    }
}
