// Redaction — span masking over the original text.
//
// All spans are byte ranges collected from the ORIGINAL text, never
// from a partially-redacted copy, so offsets stay well-defined no
// matter how many rules matched. Applying them as a per-char mask makes
// overlapping spans stable regardless of collection order, and makes
// redaction idempotent (the redaction char is a non-word char and never
// matches any rule).

pub const DEFAULT_REDACTION_CHAR: char = '*';

/// Replace every char covered by a span with the redaction char.
///
/// Output has the same char length as the input; each matched span
/// becomes an equal-length run of `redaction`.
pub fn apply_spans(text: &str, spans: &[(usize, usize)], redaction: char) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, c) in text.char_indices() {
        if spans.iter().any(|&(start, end)| idx >= start && idx < end) {
            out.push(redaction);
        } else {
            out.push(c);
        }
    }
    out
}
