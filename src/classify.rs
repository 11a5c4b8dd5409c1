//! Keyword-based text classification.
//!
//! All natural-language heuristics in the engine (action verbs, business
//! nouns, pagination parameter names, error-code fields, issue topic
//! classification) go through [`KeywordMatcher`], a single
//! `matches(&str) -> bool` contract. Swapping the vocabulary changes what is
//! detected without touching any aggregation logic.

use serde::{Deserialize, Serialize};

/// Case-insensitive substring matcher over a fixed vocabulary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeywordMatcher {
    words: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    /// True if any vocabulary word occurs as a substring of `text`
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.words.iter().any(|w| lowered.contains(w.as_str()))
    }

    /// True if `text` equals any vocabulary word (case-insensitive)
    pub fn matches_exact(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.words.iter().any(|w| w == &lowered)
    }

    /// True if `text` starts with a vocabulary word followed by an uppercase
    /// character. Used for operationId conventions like `listUsers`.
    pub fn matches_prefix(&self, text: &str) -> bool {
        self.words.iter().any(|w| {
            text.len() > w.len()
                && text.is_char_boundary(w.len())
                && text[..w.len()].eq_ignore_ascii_case(w)
                && text[w.len()..].chars().next().is_some_and(|c| c.is_uppercase())
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Detection vocabulary for the whole engine.
///
/// Held inside the scoring configuration so the methodology can be versioned
/// and overridden as one immutable value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Lexicon {
    /// Action verbs rewarded by the natural-language quality sub-factor
    pub action_verbs: KeywordMatcher,
    /// Business-context nouns rewarded by the natural-language quality sub-factor
    pub business_nouns: KeywordMatcher,
    /// operationId verb prefixes (listUsers, createOrder, ...)
    pub id_verb_prefixes: KeywordMatcher,
    /// Recognized pagination parameter names (matched exactly)
    pub pagination_params: KeywordMatcher,
    /// Error-schema property names carrying an error code (matched exactly)
    pub error_code_fields: KeywordMatcher,
    /// Error-schema property names carrying retry guidance (matched exactly)
    pub retry_fields: KeywordMatcher,
    /// Markers classifying an issue as reference-related
    pub ref_markers: KeywordMatcher,
    /// Markers classifying an issue as schema-related
    pub schema_markers: KeywordMatcher,
    /// Path substrings (besides a trailing `s`) marking a list operation
    pub list_markers: KeywordMatcher,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            action_verbs: KeywordMatcher::new([
                "create", "retrieve", "update", "delete", "list", "get", "fetch", "return",
                "allow", "enable", "provide", "send", "receive", "validate", "process",
                "generate", "initiate", "cancel", "submit",
            ]),
            business_nouns: KeywordMatcher::new([
                "user",
                "customer",
                "order",
                "payment",
                "account",
                "product",
                "invoice",
                "subscription",
                "transaction",
                "request",
                "response",
                "data",
                "resource",
            ]),
            id_verb_prefixes: KeywordMatcher::new([
                "get", "list", "create", "update", "delete", "fetch", "find", "search", "add",
                "remove", "set", "upload", "download", "send", "receive", "validate", "process",
                "generate", "initiate", "cancel", "submit",
            ]),
            pagination_params: KeywordMatcher::new([
                "page",
                "limit",
                "offset",
                "cursor",
                "per_page",
                "page_size",
                "skip",
                "take",
                "after",
                "before",
            ]),
            error_code_fields: KeywordMatcher::new([
                "code",
                "error_code",
                "errorcode",
                "status",
                "type",
            ]),
            retry_fields: KeywordMatcher::new([
                "retry_after",
                "retryafter",
                "retry_after_seconds",
                "retryable",
            ]),
            ref_markers: KeywordMatcher::new(["ref"]),
            schema_markers: KeywordMatcher::new(["schema"]),
            list_markers: KeywordMatcher::new(["list", "search"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let verbs = Lexicon::default().action_verbs;
        assert!(verbs.matches("Retrieves the current user"));
        assert!(verbs.matches("CANCELS a pending job"));
        assert!(!verbs.matches("the current weather"));
    }

    #[test]
    fn test_exact_match_for_parameter_names() {
        let params = Lexicon::default().pagination_params;
        assert!(params.matches_exact("limit"));
        assert!(params.matches_exact("Cursor"));
        assert!(!params.matches_exact("limits"));
    }

    #[test]
    fn test_prefix_match_requires_capitalized_noun() {
        let prefixes = Lexicon::default().id_verb_prefixes;
        assert!(prefixes.matches_prefix("listUsers"));
        assert!(prefixes.matches_prefix("createOrder"));
        // Bare verb, lowercase continuation, and unrelated ids all fail
        assert!(!prefixes.matches_prefix("list"));
        assert!(!prefixes.matches_prefix("settle"));
        assert!(!prefixes.matches_prefix("usersIndex"));
    }

    #[test]
    fn test_prefix_match_does_not_confuse_overlapping_verbs() {
        let prefixes = Lexicon::default().id_verb_prefixes;
        // "generateReport" must match via "generate", not fail via "get"
        assert!(prefixes.matches_prefix("generateReport"));
    }

    #[test]
    fn test_ref_marker_covers_reference() {
        let refs = Lexicon::default().ref_markers;
        assert!(refs.matches("unresolved $ref pointer"));
        assert!(refs.matches("broken reference to components"));
        assert!(!refs.matches("missing description"));
    }
}
