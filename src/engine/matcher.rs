//! Keyword matcher - finds taxonomy terms in submitted text.
//!
//! This is the first stage of the classification pipeline. It is purely
//! lexical: no tokenization, no stemming, no diacritic folding.

use crate::domain::MatchResult;
use crate::engine::taxonomy::Taxonomy;

/// Trait for matcher implementations.
pub trait KeywordMatcher: Send + Sync {
    /// Find every taxonomy term present in `text`, in taxonomy order.
    fn find_matches(&self, text: &str) -> MatchResult;
}

/// Case-insensitive substring matcher.
///
/// A term matches when it occurs anywhere in the lowercased text, including
/// inside longer words ("kind" matches "Kindergarten"). A whole-word hit is
/// always also a substring hit, so no separate word-boundary test is made.
pub struct SubstringMatcher {
    taxonomy: Taxonomy,
}

impl SubstringMatcher {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }
}

impl KeywordMatcher for SubstringMatcher {
    fn find_matches(&self, text: &str) -> MatchResult {
        if text.is_empty() {
            return MatchResult::empty();
        }

        let text_lower = text.to_lowercase();
        let terms = self
            .taxonomy
            .terms()
            .iter()
            .filter(|term| text_lower.contains(term.as_str()))
            .cloned()
            .collect();

        MatchResult::new(terms)
    }
}

/// True when the lowercased text contains any of `terms`.
pub fn contains_any(text: &str, terms: &[String]) -> bool {
    let text_lower = text.to_lowercase();
    terms.iter().any(|term| text_lower.contains(term.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrivacyConfig;

    fn default_matcher() -> SubstringMatcher {
        SubstringMatcher::new(Taxonomy::new(&PrivacyConfig::default().keywords))
    }

    #[test]
    fn test_empty_input_has_no_matches() {
        let matcher = default_matcher();
        assert!(matcher.find_matches("").is_empty());
    }

    #[test]
    fn test_non_alphabetic_input_has_no_matches() {
        let matcher = default_matcher();
        assert!(matcher.find_matches("1234 !!! ?? 🙂").is_empty());
    }

    #[test]
    fn test_clean_text() {
        let matcher = default_matcher();
        assert!(matcher.find_matches("Heute scheint die Sonne.").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = default_matcher();
        assert_eq!(matcher.find_matches("IBAN"), matcher.find_matches("iban"));
        assert_eq!(matcher.find_matches("IbAn").terms(), &["iban"]);
    }

    #[test]
    fn test_output_follows_taxonomy_order() {
        let matcher = default_matcher();
        let result = matcher.find_matches("Mein Passwort und meine IBAN");
        assert_eq!(result.terms(), &["iban", "passwort"]);
    }

    #[test]
    fn test_substring_inside_longer_word_matches() {
        let matcher = default_matcher();
        let result = matcher.find_matches("Der Kindergarten ist toll");
        assert_eq!(result.terms(), &["kind"]);
    }

    #[test]
    fn test_compound_matches_every_contained_term() {
        let matcher = default_matcher();
        let result = matcher.find_matches("Meine Kreditkartennummer ist 1234");
        assert_eq!(
            result.terms(),
            &["kreditkarte", "kreditkartennummer", "kartennummer"]
        );
    }

    #[test]
    fn test_punctuation_adjacent_term_matches() {
        let matcher = default_matcher();
        let result = matcher.find_matches("(urlaub!)");
        assert_eq!(result.terms(), &["urlaub"]);
    }

    #[test]
    fn test_hyphenated_variant() {
        let matcher = default_matcher();
        let result = matcher.find_matches("Kreditkarten-Nummer bitte");
        assert_eq!(result.terms(), &["kreditkarte", "kreditkarten-nummer"]);
    }

    #[test]
    fn test_contains_any() {
        let terms = vec!["iban".to_string(), "kreditkarte".to_string()];
        assert!(contains_any("Meine IBAN lautet", &terms));
        assert!(!contains_any("Ich war im Urlaub", &terms));
        assert!(!contains_any("", &terms));
    }
}
