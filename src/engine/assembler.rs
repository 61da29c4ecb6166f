//! Response assembly - packages an assessment for the end user.

use crate::domain::{AnalysisReport, Empathy, RiskAssessment};
use crate::engine::matcher::contains_any;

pub const NONE_DETECTED: &str = "Keine";
pub const EMPATHY_MESSAGE: &str =
    "Das klingt sehr persönlich. Wir helfen dir, deinen Text zu schützen.";
pub const EMPATHY_LEVEL: &str = "empathy-box";

/// Builds [`AnalysisReport`]s from assessments.
pub struct ResponseAssembler {
    howto_terms: Vec<String>,
}

impl ResponseAssembler {
    pub fn new(howto_terms: Vec<String>) -> Self {
        Self { howto_terms }
    }

    /// Assemble the report for `text` and its assessment.
    ///
    /// The how-to flag rescans the original text against its own term list
    /// and does not consult the assessment's matches.
    pub fn assemble(&self, text: &str, assessment: &RiskAssessment) -> AnalysisReport {
        let detected = !assessment.matches.is_empty();

        let detected_data = if detected {
            assessment
                .matches
                .iter()
                .map(|term| format!("** {}", title_case(term)))
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            NONE_DETECTED.to_string()
        };

        let empathy = detected.then(|| Empathy {
            message: EMPATHY_MESSAGE.to_string(),
            level: EMPATHY_LEVEL.to_string(),
        });

        AnalysisReport {
            detected_data,
            tier: assessment.tier,
            explanation: assessment.explanation.clone(),
            tip: assessment.tip.clone(),
            empathy,
            rewrite_offer: detected,
            howto: contains_any(text, &self.howto_terms),
            matches: assessment.matches.clone(),
        }
    }
}

/// Title-case every letter that follows a non-letter, lower-case the rest.
///
/// `kreditkarten-nummer` becomes `Kreditkarten-Nummer`. Letters whose upper
/// case expands keep only the first character upper (`ß` becomes `Ss`), and
/// the Latin digraphs use their titlecase forms (`ǆ` becomes `ǅ`).
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut prev_is_letter = false;
    for c in term.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                push_titlecase(&mut out, c);
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

fn push_titlecase(out: &mut String, c: char) {
    let digraph = match c {
        'Ǆ' | 'ǅ' | 'ǆ' => Some('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => Some('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => Some('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => Some('ǲ'),
        _ => None,
    };
    if let Some(title) = digraph {
        out.push(title);
        return;
    }

    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}
