//! Risk assessment domain types.
//!
//! Represents the classification of a single piece of submitted text.
//! Values are created per request and never stored.

use serde::{Deserialize, Serialize};

/// Binary risk tier. Any single match escalates to `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// No taxonomy term detected.
    NoRisk,
    /// At least one taxonomy term detected.
    Critical,
}

impl RiskTier {
    /// Label shown to end users.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::NoRisk => "🟢 Kein Risiko",
            RiskTier::Critical => "🔴 Kritisch",
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, RiskTier::Critical)
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::NoRisk => write!(f, "no_risk"),
            RiskTier::Critical => write!(f, "critical"),
        }
    }
}

/// Taxonomy terms found in a text, in taxonomy-definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchResult {
    terms: Vec<String>,
}

impl MatchResult {
    /// Wrap terms that are already in taxonomy order.
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Outcome of the risk policy for one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Assessed tier. `Critical` iff `matches` is non-empty.
    pub tier: RiskTier,

    /// Human-readable explanation of the tier.
    pub explanation: String,

    /// Combined remediation guidance. May embed hyperlink markup.
    pub tip: String,

    /// Matched taxonomy terms.
    pub matches: MatchResult,
}
