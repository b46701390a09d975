// Strictness dial — five fixed presets keyed 1 (strictest) to 5.
//
// Each level fixes the active category set, a sensitivity multiplier,
// and a permanent allow-list of terms the level tolerates. The table is
// constant data built once at startup; levels only ever get more
// permissive as the number goes up (smaller category set, lower
// multiplier, broader allow-list).

use std::collections::HashSet;

use crate::error::ModerationError;
use crate::models::Category;

/// One strictness preset.
#[derive(Debug, Clone)]
pub struct DialConfig {
    pub name: &'static str,
    pub description: &'static str,
    /// Categories scored at this level, in canonical order. Non-empty
    /// for every level; level 5 scores hate_speech only.
    pub active_categories: Vec<Category>,
    /// Scales the length-normalized base score (> 0).
    pub sensitivity_multiplier: f64,
    /// Terms this level never detects or redacts, case-folded.
    pub allowed_terms: HashSet<String>,
}

impl DialConfig {
    fn new(
        name: &'static str,
        description: &'static str,
        active_categories: &[Category],
        sensitivity_multiplier: f64,
        allowed_terms: &[&str],
    ) -> Self {
        DialConfig {
            name,
            description,
            active_categories: active_categories.to_vec(),
            sensitivity_multiplier,
            allowed_terms: allowed_terms.iter().map(|t| t.to_lowercase()).collect(),
        }
    }
}

/// The five dial presets, immutable after construction.
pub struct DialTable {
    configs: [DialConfig; 5],
}

pub const MIN_DIAL: u8 = 1;
pub const MAX_DIAL: u8 = 5;

impl DialTable {
    pub fn new() -> Self {
        let all = Category::ALL;
        DialTable {
            configs: [
                DialConfig::new(
                    "Family Safe",
                    "Everything scored at maximum sensitivity, nothing tolerated",
                    &all,
                    1.5,
                    &[],
                ),
                DialConfig::new(
                    "Strict",
                    "All categories, slightly elevated sensitivity",
                    &all,
                    1.25,
                    &["hell"],
                ),
                DialConfig::new(
                    "General",
                    "All categories at baseline sensitivity, mild profanity tolerated",
                    &all,
                    1.0,
                    &["damn", "hell", "crap", "bullshit"],
                ),
                DialConfig::new(
                    "Relaxed",
                    "Profanity not scored, casual swearing tolerated",
                    &[Category::Toxicity, Category::HateSpeech, Category::Spam],
                    0.75,
                    &["damn", "hell", "crap", "bullshit", "ass", "piss"],
                ),
                DialConfig::new(
                    "Minimal",
                    "Hate speech only, lowest sensitivity",
                    &[Category::HateSpeech],
                    0.5,
                    &[],
                ),
            ],
        }
    }

    /// Look up the preset for a dial level. Fails for levels outside
    /// 1..=5 — the only caller error the engine surfaces.
    pub fn config(&self, level: u8) -> Result<&DialConfig, ModerationError> {
        if !(MIN_DIAL..=MAX_DIAL).contains(&level) {
            return Err(ModerationError::InvalidDialLevel { level });
        }
        Ok(&self.configs[(level - 1) as usize])
    }

    /// All presets in level order, for introspection/metadata callers.
    pub fn list(&self) -> Vec<(u8, &DialConfig)> {
        self.configs
            .iter()
            .enumerate()
            .map(|(i, c)| (i as u8 + 1, c))
            .collect()
    }
}

impl Default for DialTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a legacy sensitivity label (the pre-dial API accepted
/// low/medium/high) to the closest dial level. Unknown labels map to
/// None and should be treated as a caller error upstream.
pub fn dial_for_legacy_sensitivity(label: &str) -> Option<u8> {
    match label.to_ascii_lowercase().as_str() {
        "high" => Some(1),
        "medium" => Some(3),
        "low" => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_levels_resolve() {
        let table = DialTable::new();
        for level in MIN_DIAL..=MAX_DIAL {
            assert!(table.config(level).is_ok());
        }
    }

    #[test]
    fn out_of_range_levels_fail() {
        let table = DialTable::new();
        assert_eq!(
            table.config(0).unwrap_err(),
            ModerationError::InvalidDialLevel { level: 0 }
        );
        assert!(table.config(6).is_err());
        assert!(table.config(255).is_err());
    }

    #[test]
    fn level_five_is_hate_speech_only() {
        let table = DialTable::new();
        let config = table.config(5).unwrap();
        assert_eq!(config.active_categories, vec![Category::HateSpeech]);
    }

    #[test]
    fn aggressiveness_never_increases_with_level() {
        let table = DialTable::new();
        for level in MIN_DIAL..MAX_DIAL {
            let cur = table.config(level).unwrap();
            let next = table.config(level + 1).unwrap();
            assert!(
                cur.sensitivity_multiplier >= next.sensitivity_multiplier,
                "multiplier increased from level {level} to {}",
                level + 1
            );
            for category in &next.active_categories {
                assert!(
                    cur.active_categories.contains(category),
                    "level {} scores {category} but level {level} does not",
                    level + 1
                );
            }
        }
    }

    #[test]
    fn legacy_labels_map_to_dials() {
        assert_eq!(dial_for_legacy_sensitivity("high"), Some(1));
        assert_eq!(dial_for_legacy_sensitivity("Medium"), Some(3));
        assert_eq!(dial_for_legacy_sensitivity("LOW"), Some(4));
        assert_eq!(dial_for_legacy_sensitivity("extreme"), None);
    }
}
