use std::env;

use anyhow::Result;

use crate::dial::{MAX_DIAL, MIN_DIAL};
use crate::engine::redact::DEFAULT_REDACTION_CHAR;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Both
/// settings have defaults, so an empty environment is fully usable.
pub struct Config {
    /// Dial level used when the caller doesn't pass one (SIFT_DEFAULT_DIAL).
    pub default_dial: u8,
    /// Character used for redaction runs (SIFT_REDACTION_CHAR).
    pub redaction_char: char,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let default_dial = match env::var("SIFT_DEFAULT_DIAL") {
            Ok(raw) => {
                let level: u8 = raw.parse().map_err(|_| {
                    anyhow::anyhow!("SIFT_DEFAULT_DIAL must be an integer 1-5, got {raw:?}")
                })?;
                if !(MIN_DIAL..=MAX_DIAL).contains(&level) {
                    anyhow::bail!("SIFT_DEFAULT_DIAL must be between 1 and 5, got {level}");
                }
                level
            }
            Err(_) => 3,
        };

        let redaction_char = match env::var("SIFT_REDACTION_CHAR") {
            Ok(raw) => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => anyhow::bail!(
                        "SIFT_REDACTION_CHAR must be exactly one character, got {raw:?}"
                    ),
                }
            }
            Err(_) => DEFAULT_REDACTION_CHAR,
        };

        Ok(Self {
            default_dial,
            redaction_char,
        })
    }
}
