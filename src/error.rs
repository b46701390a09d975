// Engine error taxonomy.
//
// Only caller errors surface as typed errors. Everything recoverable
// (empty custom terms, a catalog pattern that fails to compile) is
// handled locally and logged — a degraded rule never fails a request.

use thiserror::Error;

/// Errors returned by the moderation engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModerationError {
    /// The requested dial level is outside 1..=5. Checked before any
    /// catalog lookup — malformed input is a caller error, not a
    /// catalog error.
    #[error("invalid dial level {level}: must be between 1 and 5")]
    InvalidDialLevel { level: u8 },
}
