//! Privacy Analyzer - orchestrates the classification pipeline.
//!
//! Pipeline order:
//! 1. Matcher - find taxonomy terms
//! 2. Risk Policy - tier, explanation, combined tip
//! 3. Response Assembler - display list and offer flags
//!
//! Holds only immutable tables, so one instance is shared across requests.

use crate::config::PrivacyConfig;
use crate::domain::{AnalysisReport, RiskAssessment};
use crate::engine::{KeywordMatcher, KeywordTables, ResponseAssembler, RiskPolicy, SubstringMatcher};

pub struct PrivacyAnalyzer {
    matcher: Box<dyn KeywordMatcher>,
    policy: RiskPolicy,
    assembler: ResponseAssembler,
    taxonomy_terms: usize,
}

impl PrivacyAnalyzer {
    /// Create an analyzer with the given components.
    pub fn new(
        matcher: Box<dyn KeywordMatcher>,
        policy: RiskPolicy,
        assembler: ResponseAssembler,
        taxonomy_terms: usize,
    ) -> Self {
        Self {
            matcher,
            policy,
            assembler,
            taxonomy_terms,
        }
    }

    /// Build the standard substring pipeline from configuration.
    pub fn from_config(config: &PrivacyConfig) -> Self {
        let tables = KeywordTables::from_config(config);
        let taxonomy_terms = tables.taxonomy.len();

        Self::new(
            Box::new(SubstringMatcher::new(tables.taxonomy)),
            RiskPolicy::new(tables.catalog),
            ResponseAssembler::new(tables.howto_terms),
            taxonomy_terms,
        )
    }

    /// Classify a text. Never fails.
    pub fn determine_risk(&self, text: &str) -> RiskAssessment {
        let matches = self.matcher.find_matches(text);
        self.policy.assess(&matches)
    }

    /// Classify a text and assemble the outward report.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let assessment = self.determine_risk(text);

        tracing::debug!(
            tier = %assessment.tier,
            matches = ?assessment.matches.terms(),
            "Risk assessment complete"
        );

        self.assembler.assemble(text, &assessment)
    }

    pub fn taxonomy_terms(&self) -> usize {
        self.taxonomy_terms
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::RiskTier;
    use crate::engine::policy::{FALLBACK_TIP, NO_RISK_TIP};

    fn default_analyzer() -> PrivacyAnalyzer {
        crate::logging::init_test();
        PrivacyAnalyzer::from_config(&PrivacyConfig::default())
    }

    #[test]
    fn test_clean_text_is_no_risk() {
        let analyzer = default_analyzer();
        let assessment = analyzer.determine_risk("Wir treffen uns morgen im Park.");
        assert_eq!(assessment.tier, RiskTier::NoRisk);
        assert!(assessment.matches.is_empty());
        assert_eq!(assessment.tip, NO_RISK_TIP);
    }

    #[test]
    fn test_any_term_is_critical() {
        let analyzer = default_analyzer();
        for term in PrivacyConfig::default().keywords {
            let text = format!("xx{}yy", term.to_uppercase());
            assert_eq!(
                analyzer.determine_risk(&text).tier,
                RiskTier::Critical,
                "term '{}' not detected",
                term
            );
        }
    }

    #[test]
    fn test_iban_and_password_tip_concatenation() {
        let analyzer = default_analyzer();
        let config = PrivacyConfig::default();

        let assessment = analyzer.determine_risk("Bitte teile deine IBAN und dein Passwort");
        assert_eq!(assessment.matches.terms(), &["iban", "passwort"]);
        assert_eq!(
            assessment.tip,
            format!("{} {}", config.tips["iban"], config.tips["passwort"])
        );
    }

    #[test]
    fn test_order_independent_of_input() {
        let analyzer = default_analyzer();
        let a = analyzer.determine_risk("standort, iban, chef");
        let b = analyzer.determine_risk("chef iban standort");
        assert_eq!(a, b);
        assert_eq!(a.matches.terms(), &["iban", "chef", "standort"]);
    }

    #[test]
    fn test_idempotent() {
        let analyzer = default_analyzer();
        let text = "Mein Kind hat eine Diagnose bekommen";
        assert_eq!(analyzer.determine_risk(text), analyzer.determine_risk(text));
        assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
    }

    #[test]
    fn test_empty_input() {
        let analyzer = default_analyzer();
        let report = analyzer.analyze("");
        assert_eq!(report.tier, RiskTier::NoRisk);
        assert!(report.matches.is_empty());
        assert!(!report.rewrite_offer);
        assert!(!report.howto);
    }

    #[test]
    fn test_howto_examples() {
        let analyzer = default_analyzer();
        assert!(analyzer.analyze("Ich sende dir meine Kreditkartennummer").howto);
        assert!(!analyzer.analyze("Ich war im Urlaub").howto);
    }

    #[test]
    fn test_urlaub_is_critical_without_howto() {
        let analyzer = default_analyzer();
        let report = analyzer.analyze("Ich war im Urlaub");
        assert_eq!(report.tier, RiskTier::Critical);
        assert_eq!(report.detected_data, "** Urlaub");
        assert!(report.rewrite_offer);
    }

    #[test]
    fn test_term_without_tip_uses_fallback() {
        let config = PrivacyConfig {
            keywords: vec!["iban".to_string(), "steuer-id".to_string()],
            tips: HashMap::from([("iban".to_string(), "IBAN-Tipp".to_string())]),
            howto_keywords: vec![],
        };
        let analyzer = PrivacyAnalyzer::from_config(&config);

        let assessment = analyzer.determine_risk("Meine Steuer-ID ist 123");
        assert_eq!(assessment.tier, RiskTier::Critical);
        assert_eq!(assessment.tip, FALLBACK_TIP);
    }

    #[test]
    fn test_very_long_input() {
        let analyzer = default_analyzer();
        let text = "a".repeat(200_000) + "passwort";
        let assessment = analyzer.determine_risk(&text);
        assert_eq!(assessment.matches.terms(), &["passwort"]);
    }
}
