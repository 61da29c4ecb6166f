//! Outward view of an assessment, before wire encoding.

use serde::Serialize;

use crate::domain::{MatchResult, RiskTier};

/// Empathy box shown alongside a critical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Empathy {
    pub message: String,
    /// Presentation class for the rendering surface.
    pub level: String,
}

/// Assembled analysis result with real booleans.
///
/// The HTTP layer stringifies the flags for the legacy consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Display list of matched terms, or the "none" placeholder.
    pub detected_data: String,
    pub tier: RiskTier,
    pub explanation: String,
    pub tip: String,
    pub empathy: Option<Empathy>,
    /// Offer guided rewriting.
    pub rewrite_offer: bool,
    /// Offer the secure-sharing guide.
    pub howto: bool,
    pub matches: MatchResult,
}
