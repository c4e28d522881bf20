//! Character-level cleansing rules.
//!
//! The chain runs in a fixed order. Rules that rewrite non-letter input
//! (`&`, URLs, phone numbers, `%`) run before the letters-only filter,
//! otherwise the filter would erase what they match.

use lazy_static::lazy_static;
use regex::Regex;

/// A single regex rewrite in the cleansing chain.
struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("cleansing rule pattern must compile"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

lazy_static! {
    static ref CLEANSING_RULES: Vec<Rule> = vec![
        // Literal "\n" escapes left behind by scrapers, then real line breaks
        Rule::new("escaped_newline", r"\\+n", " "),
        Rule::new("newline", r"[\r\n]", " "),
        // Escaped byte sequences such as \xf0\x9f
        Rule::new("escaped_hex", r"\\x.{2}", " "),
        // URLs go before "&" is rewritten so query strings are dropped whole
        Rule::new("url", r"(www\.[^\s]+)|(https?://[^\s]+)", " "),
        Rule::new("html_ampersand", r"&amp;", " dan "),
        Rule::new("ampersand", r"&", " dan "),
        Rule::new("phone_id", r"\+62\d{2,}", " "),
        Rule::new("phone", r"\+?\d{4,5}-\d{4}-\d{4}", " "),
        Rule::new("percent", r"%", " persen "),
        Rule::new("punctuation", r"[[:punct:]]", " "),
        Rule::new("non_letter", r"[^a-z ]", " "),
        Rule::new("retweet", r"\brt\b", " "),
        Rule::new("user_mention", r"\buser\b", " "),
        Rule::new("multi_space", r" {2,}", " "),
    ];

    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^a-zA-Z0-9]").expect("valid regex");
}

/// Lowercase the whole text.
pub fn text_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Run the cleansing rule chain over already-lowercased text.
///
/// Output holds only `a-z` separated by single spaces, with no leading or
/// trailing whitespace. Running it on its own output changes nothing.
pub fn remove_unnecessary_char(text: &str) -> String {
    let mut cleaned = text.to_string();
    for rule in CLEANSING_RULES.iter() {
        cleaned = rule.apply(&cleaned);
    }
    cleaned.trim().to_string()
}

/// Names of the cleansing rules in execution order.
pub fn rule_names() -> Vec<&'static str> {
    CLEANSING_RULES.iter().map(|r| r.name).collect()
}

/// Replace every character outside `[a-zA-Z0-9]` with a space.
///
/// This is the simpler filter echoed back by the single-text endpoint; it
/// keeps case and digits and does not collapse whitespace.
pub fn alphanumeric_only(text: &str) -> String {
    NON_ALPHANUMERIC.replace_all(text, " ").into_owned()
}
