// Built-in detection pattern tables.
//
// One curated, ordered list of regex sources per category. Matching is
// case-insensitive (the `(?i)` flag is added at compile time) and
// word-boundary based, except the intentionally phrase-based patterns
// (adjacent-word constructions like "kill you" or "shut up").
//
// These lists are the catalog's fixed content — categories cannot be
// added or mutated at runtime.

use crate::models::Category;

const PROFANITY: &[&str] = &[
    r"\b(fuck|shit|damn|ass|bitch|bastard|crap)\b",
    r"\b(hell|piss|dick|cock|pussy)\b",
    r"\b(bullshit|goddamn|jackass)\b",
];

const TOXICITY: &[&str] = &[
    r"\b(idiot|stupid|dumb|moron|retard)\b",
    r"\b(hate|kill|die|death)\s+(you|yourself)",
    r"(shut\s+up|fuck\s+off)",
];

const HATE_SPEECH: &[&str] = &[
    r"\b(racist|sexist|homophobic|transphobic)\b",
    r"\b(n[i1]gg[ae]r|f[a4]gg[o0]t)\b",
];

const SPAM: &[&str] = &[
    r"(click here|buy now|limited time|act now).*(http|www)",
    r"(viagra|cialis|pharmacy|pills).*\$",
    r"(earn \$|make money|work from home).*guaranteed",
];

/// The ordered pattern sources for a category.
pub fn patterns_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Profanity => PROFANITY,
        Category::Toxicity => TOXICITY,
        Category::HateSpeech => HATE_SPEECH,
        Category::Spam => SPAM,
    }
}
