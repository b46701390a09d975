// Rule catalog — immutable category → rule-list mapping.
//
// Built once at startup and read-only for the process lifetime. Lookups
// are purely functional; the catalog has no per-request state. Patterns
// that fail to compile are logged and skipped at load time so a bad
// pattern can never abort a request.

pub mod matcher;
pub mod patterns;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::models::Category;
use matcher::{Matcher, RegexRule};

/// The immutable rule catalog. Safe to share across threads.
pub struct RuleCatalog {
    rules: HashMap<Category, Vec<Arc<dyn Matcher>>>,
}

impl RuleCatalog {
    /// Compile the built-in pattern tables into a catalog.
    pub fn new() -> Self {
        let mut rules: HashMap<Category, Vec<Arc<dyn Matcher>>> = HashMap::new();
        let mut compiled = 0usize;

        for category in Category::ALL {
            let category_rules: Vec<Arc<dyn Matcher>> = patterns::patterns_for(category)
                .iter()
                .filter_map(|p| RegexRule::compile(p))
                .map(|r| Arc::new(r) as Arc<dyn Matcher>)
                .collect();
            compiled += category_rules.len();
            rules.insert(category, category_rules);
        }

        info!(rules = compiled, "Rule catalog loaded");
        RuleCatalog { rules }
    }

    /// The ordered rule list for a category.
    pub fn rules_for(&self, category: Category) -> &[Arc<dyn Matcher>] {
        self.rules
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_compiles_all_builtin_patterns() {
        let catalog = RuleCatalog::new();
        for category in Category::ALL {
            assert_eq!(
                catalog.rules_for(category).len(),
                patterns::patterns_for(category).len(),
                "every built-in {category} pattern should compile"
            );
        }
    }

    #[test]
    fn profanity_rules_match_expected_terms() {
        let catalog = RuleCatalog::new();
        let text = "what the hell, this is bullshit";
        let total: usize = catalog
            .rules_for(Category::Profanity)
            .iter()
            .map(|r| r.find_matches(text).len())
            .sum();
        assert_eq!(total, 2); // "hell" + "bullshit"
    }

    #[test]
    fn spam_rules_match_promo_link_combo() {
        let catalog = RuleCatalog::new();
        let text = "CLICK HERE NOW! visit www.scam.com";
        let total: usize = catalog
            .rules_for(Category::Spam)
            .iter()
            .map(|r| r.find_matches(text).len())
            .sum();
        assert_eq!(total, 1);
    }
}
