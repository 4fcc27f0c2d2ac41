//! Intent classification for incoming questions.
//!
//! Intents form a closed enum and the rules live in one ordered table,
//! evaluated top to bottom; the first match wins and nothing is scored.
//! Conversational rules come first, then the domain-keyword gate, then the
//! analytical categories.

use lazy_static::lazy_static;
use regex::Regex;

/// Question category. The first six are terminal canned replies; the rest
/// select a query branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    SmallTalk,
    Creator,
    Identity,
    Farewell,
    OffDomain,
    RainfallSuperlative,
    Rainfall,
    Crop,
    Correlation,
    Overview,
}

const GREETINGS: &[&str] = &["hi", "hello", "hey", "good morning", "good evening"];

const DOMAIN_KEYWORDS: &[&str] = &[
    "rain",
    "rainfall",
    "district",
    "crop",
    "production",
    "area",
    "productivity",
    "yield",
    "monsoon",
    "agriculture",
    "climate",
];

const RAINFALL_KEYWORDS: &[&str] = &[
    "rainfall",
    "rain",
    "monsoon",
    "precipitation",
    "weather",
    "climate",
];

const CROP_KEYWORDS: &[&str] = &[
    "crop",
    "production",
    "agriculture",
    "farming",
    "paddy",
    "rice",
    "wheat",
    "productivity",
    "yield",
    "area",
    "maize",
    "ragi",
    "jowar",
    "bajra",
];

const CORRELATION_KEYWORDS: &[&str] = &[
    "correlate",
    "correlation",
    "relationship",
    "impact",
    "affect",
];

lazy_static! {
    static ref SUPERLATIVE_RE: Regex = Regex::new(
        r"(which district|where).*?(highest|max(?:imum)?|most).*?(rain|rainfall|precipitation)"
    )
    .unwrap();
}

/// One row of the rule table.
enum Matcher {
    /// The whole normalized question equals one of the tokens.
    EqualsAny(&'static [&'static str]),
    /// Any token occurs somewhere in the question.
    ContainsAny(&'static [&'static str]),
    /// None of the tokens occur anywhere in the question.
    LacksAll(&'static [&'static str]),
    /// The district-superlative rainfall pattern.
    Superlative,
}

impl Matcher {
    fn matches(&self, question: &str) -> bool {
        match self {
            Matcher::EqualsAny(tokens) => tokens.iter().any(|t| question == *t),
            Matcher::ContainsAny(tokens) => tokens.iter().any(|t| question.contains(t)),
            Matcher::LacksAll(tokens) => !tokens.iter().any(|t| question.contains(t)),
            Matcher::Superlative => SUPERLATIVE_RE.is_match(question),
        }
    }
}

static RULES: &[(Matcher, Intent)] = &[
    (Matcher::EqualsAny(GREETINGS), Intent::Greeting),
    (Matcher::ContainsAny(&["how are you"]), Intent::SmallTalk),
    (
        Matcher::ContainsAny(&["who made you", "developer"]),
        Intent::Creator,
    ),
    (
        Matcher::ContainsAny(&["what is your name", "who are you", "your name"]),
        Intent::Identity,
    ),
    (Matcher::ContainsAny(&["bye", "thank"]), Intent::Farewell),
    (Matcher::LacksAll(DOMAIN_KEYWORDS), Intent::OffDomain),
    (Matcher::Superlative, Intent::RainfallSuperlative),
    (Matcher::ContainsAny(RAINFALL_KEYWORDS), Intent::Rainfall),
    (Matcher::ContainsAny(CROP_KEYWORDS), Intent::Crop),
    (Matcher::ContainsAny(CORRELATION_KEYWORDS), Intent::Correlation),
];

/// Trim and lower-case a question. Classification and every downstream
/// match run on this form; the original casing is never needed again.
pub fn normalize(question: &str) -> String {
    question.trim().to_lowercase()
}

/// Classify a raw question. Normalizes internally, so callers can pass
/// user input as typed.
pub fn classify(question: &str) -> Intent {
    let normalized = normalize(question);
    for (matcher, intent) in RULES {
        if matcher.matches(&normalized) {
            return *intent;
        }
    }
    Intent::Overview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_must_equal_the_whole_question() {
        assert_eq!(classify("hi"), Intent::Greeting);
        assert_eq!(classify("  Hello "), Intent::Greeting);
        assert_eq!(classify("good morning"), Intent::Greeting);
        // A greeting embedded in a longer sentence is not a greeting.
        assert_ne!(classify("hi, which district gets most rainfall?"), Intent::Greeting);
        assert_eq!(classify("hello there"), Intent::OffDomain);
    }

    #[test]
    fn conversational_rules_fire_before_domain_rules() {
        assert_eq!(classify("How are you today?"), Intent::SmallTalk);
        assert_eq!(classify("who made you?"), Intent::Creator);
        assert_eq!(classify("what is your name"), Intent::Identity);
        assert_eq!(classify("who are you"), Intent::Identity);
        assert_eq!(classify("thank you for the rainfall data"), Intent::Farewell);
        assert_eq!(classify("bye"), Intent::Farewell);
    }

    #[test]
    fn questions_without_domain_keywords_are_off_domain() {
        assert_eq!(classify("qwertyzxy"), Intent::OffDomain);
        assert_eq!(classify("tell me a joke"), Intent::OffDomain);
        assert_eq!(classify("what is the capital of France?"), Intent::OffDomain);
    }

    #[test]
    fn superlative_pattern_allows_arbitrary_text_between_anchors() {
        assert_eq!(
            classify("Which district has the highest rainfall?"),
            Intent::RainfallSuperlative
        );
        assert_eq!(
            classify("where did we record the most rain last monsoon"),
            Intent::RainfallSuperlative
        );
        // "precipitation" satisfies the pattern but not the domain gate,
        // which runs first.
        assert_eq!(
            classify("where did we see the most precipitation"),
            Intent::OffDomain
        );
        // Anchors out of order do not match.
        assert_eq!(classify("highest rainfall is in which district"), Intent::Rainfall);
    }

    #[test]
    fn rainfall_outranks_crop_when_both_keyword_sets_hit() {
        assert_eq!(classify("does monsoon rain help paddy production?"), Intent::Rainfall);
        assert_eq!(classify("show paddy production"), Intent::Crop);
    }

    #[test]
    fn correlation_requires_a_domain_keyword_outside_the_other_sets() {
        assert_eq!(classify("what is the impact across districts?"), Intent::Correlation);
        // "impact" plus a rainfall keyword routes to rainfall first.
        assert_eq!(classify("impact of climate"), Intent::Rainfall);
    }

    #[test]
    fn anything_else_in_domain_falls_back_to_overview() {
        assert_eq!(classify("tell me about the districts"), Intent::Overview);
    }
}
