//! Risk Policy - turns matched terms into a tier, explanation and tip.
//!
//! Binary model: one match escalates exactly as far as many matches.
//! There is no weighting between terms.

use crate::domain::{MatchResult, RiskAssessment, RiskTier};
use crate::engine::taxonomy::TipCatalog;

pub const NO_RISK_EXPLANATION: &str = "Keine sensiblen Inhalte erkannt.";
pub const NO_RISK_TIP: &str = "Keine Maßnahmen erforderlich.";
pub const CRITICAL_EXPLANATION: &str = "Diese Info solltest du nur vertraulich teilen.";
pub const FALLBACK_TIP: &str = "Verwende sichere Übertragungswege.";

/// Catalog-driven risk policy.
pub struct RiskPolicy {
    catalog: TipCatalog,
}

impl RiskPolicy {
    pub fn new(catalog: TipCatalog) -> Self {
        Self { catalog }
    }

    /// Assess a match set. Total over every input.
    pub fn assess(&self, matches: &MatchResult) -> RiskAssessment {
        if matches.is_empty() {
            return RiskAssessment {
                tier: RiskTier::NoRisk,
                explanation: NO_RISK_EXPLANATION.to_string(),
                tip: NO_RISK_TIP.to_string(),
                matches: MatchResult::empty(),
            };
        }

        RiskAssessment {
            tier: RiskTier::Critical,
            explanation: CRITICAL_EXPLANATION.to_string(),
            tip: self.combined_tip(matches),
            matches: matches.clone(),
        }
    }

    /// Catalog tips of the matched terms in match order, joined by a space.
    fn combined_tip(&self, matches: &MatchResult) -> String {
        let tips: Vec<&str> = matches
            .iter()
            .filter_map(|term| self.catalog.tip_for(term))
            .collect();

        if tips.is_empty() {
            FALLBACK_TIP.to_string()
        } else {
            tips.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrivacyConfig;

    fn default_policy() -> RiskPolicy {
        RiskPolicy::new(TipCatalog::new(PrivacyConfig::default().tips))
    }

    fn matches(terms: &[&str]) -> MatchResult {
        MatchResult::new(terms.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_no_matches_is_no_risk() {
        let assessment = default_policy().assess(&MatchResult::empty());
        assert_eq!(assessment.tier, RiskTier::NoRisk);
        assert_eq!(assessment.explanation, NO_RISK_EXPLANATION);
        assert_eq!(assessment.tip, NO_RISK_TIP);
        assert!(assessment.matches.is_empty());
    }

    #[test]
    fn test_single_match_is_critical() {
        let assessment = default_policy().assess(&matches(&["standort"]));
        assert_eq!(assessment.tier, RiskTier::Critical);
        assert_eq!(assessment.explanation, CRITICAL_EXPLANATION);
        assert!(assessment.tip.starts_with("📍"));
    }

    #[test]
    fn test_many_matches_same_tier_as_one() {
        let policy = default_policy();
        let one = policy.assess(&matches(&["iban"]));
        let many = policy.assess(&matches(&["iban", "passwort", "kind", "urlaub"]));
        assert_eq!(one.tier, many.tier);
    }

    #[test]
    fn test_tips_joined_in_match_order() {
        let config = PrivacyConfig::default();
        let assessment = default_policy().assess(&matches(&["iban", "passwort"]));
        let expected = format!("{} {}", config.tips["iban"], config.tips["passwort"]);
        assert_eq!(assessment.tip, expected);
    }

    #[test]
    fn test_terms_without_tip_are_skipped() {
        let config = PrivacyConfig::default();
        let assessment = default_policy().assess(&matches(&["login", "iban", "token"]));
        assert_eq!(assessment.tip, config.tips["iban"]);
    }

    #[test]
    fn test_fallback_tip_when_no_catalog_entry() {
        let assessment = default_policy().assess(&matches(&["login"]));
        assert_eq!(assessment.tier, RiskTier::Critical);
        assert_eq!(assessment.tip, FALLBACK_TIP);
    }
}
