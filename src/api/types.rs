//! API request and response types.
//!
//! Flags travel as `"true"` / `""` strings for the existing browser
//! consumer. Everything behind this module uses real booleans.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::AnalysisReport;

/// Maximum number of texts in one batch request.
pub const MAX_BATCH_TEXTS: usize = 20;

fn flag(value: bool) -> String {
    if value {
        "true".to_string()
    } else {
        String::new()
    }
}

// ==================== Analyze ====================

/// Request to analyze a text. A missing or null text counts as empty.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Analysis result in the legacy wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Matched terms for display, or "Keine".
    pub detected_data: String,
    /// Risk tier label.
    pub risk_level: String,
    pub explanation: String,
    /// Remediation tip, may contain hyperlink markup.
    pub tip: String,
    /// Always empty; kept for the consumer.
    pub source: String,
    pub empathy_message: String,
    pub empathy_level: String,
    /// "true" or "".
    pub rewrite_offer: String,
    /// "true" or "".
    pub howto: String,
}

impl From<AnalysisReport> for AnalyzeResponse {
    fn from(report: AnalysisReport) -> Self {
        let (empathy_message, empathy_level) = match report.empathy {
            Some(empathy) => (empathy.message, empathy.level),
            None => (String::new(), String::new()),
        };

        Self {
            detected_data: report.detected_data,
            risk_level: report.tier.label().to_string(),
            explanation: report.explanation,
            tip: report.tip,
            source: String::new(),
            empathy_message,
            empathy_level,
            rewrite_offer: flag(report.rewrite_offer),
            howto: flag(report.howto),
        }
    }
}

// ==================== Batch ====================

/// One batch entry: a bare string or an object with an optional id.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum BatchItem {
    Plain(String),
    Tagged {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        text: Option<String>,
    },
}

impl BatchItem {
    /// Resolve id and text; missing ids become `text-{index}`.
    pub fn into_parts(self, index: usize) -> (String, String) {
        match self {
            BatchItem::Plain(text) => (format!("text-{}", index), text),
            BatchItem::Tagged { id, text } => (
                id.filter(|id| !id.is_empty())
                    .unwrap_or_else(|| format!("text-{}", index)),
                text.unwrap_or_default(),
            ),
        }
    }
}

/// Request to analyze several texts at once.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchAnalyzeRequest {
    #[serde(default)]
    pub texts: Vec<BatchItem>,
}

/// Result for one batch entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BatchResult {
    pub id: String,
    pub result: AnalyzeResponse,
}

/// Response for a batch analysis.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BatchAnalyzeResponse {
    pub results: Vec<BatchResult>,
    pub total: usize,
    /// Number of entries assessed as critical.
    pub critical_count: usize,
}

// ==================== Rewrite ====================

/// Request to rewrite a text.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RewriteRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Rewritten text.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RewriteResponse {
    pub rewritten: String,
}

// ==================== How-to ====================

/// Secure-sharing guide.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HowtoResponse {
    pub howto: String,
}

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// "enabled" or "disabled".
    pub rewrite: String,
    /// Number of taxonomy terms loaded.
    pub taxonomy_terms: usize,
    /// Timestamp.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Empathy, MatchResult, RiskTier};

    #[test]
    fn test_flags_are_legacy_strings() {
        let report = AnalysisReport {
            detected_data: "** Iban".to_string(),
            tier: RiskTier::Critical,
            explanation: "e".to_string(),
            tip: "t".to_string(),
            empathy: Some(Empathy {
                message: "m".to_string(),
                level: "empathy-box".to_string(),
            }),
            rewrite_offer: true,
            howto: false,
            matches: MatchResult::new(vec!["iban".to_string()]),
        };

        let response = AnalyzeResponse::from(report);
        assert_eq!(response.risk_level, "🔴 Kritisch");
        assert_eq!(response.rewrite_offer, "true");
        assert_eq!(response.howto, "");
        assert_eq!(response.empathy_level, "empathy-box");
        assert_eq!(response.source, "");
    }

    #[test]
    fn test_analyze_request_tolerates_missing_and_null_text() {
        let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.text.is_none());
        let req: AnalyzeRequest = serde_json::from_str(r#"{"text":null}"#).unwrap();
        assert!(req.text.is_none());
    }

    #[test]
    fn test_batch_item_forms() {
        let req: BatchAnalyzeRequest = serde_json::from_str(
            r#"{"texts":["meine IBAN",{"id":"a","text":"hallo"},{"text":"ohne id"}]}"#,
        )
        .unwrap();

        let parts: Vec<(String, String)> = req
            .texts
            .into_iter()
            .enumerate()
            .map(|(i, item)| item.into_parts(i))
            .collect();

        assert_eq!(parts[0], ("text-0".to_string(), "meine IBAN".to_string()));
        assert_eq!(parts[1], ("a".to_string(), "hallo".to_string()));
        assert_eq!(parts[2], ("text-2".to_string(), "ohne id".to_string()));
    }
}
