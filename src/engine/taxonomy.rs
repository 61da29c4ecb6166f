//! Keyword taxonomy and tip catalog.
//!
//! Static data built once at startup from [`PrivacyConfig`] and shared
//! read-only across requests.

use std::collections::HashMap;

use crate::config::PrivacyConfig;

/// Ordered set of lowercase risk-indicating terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    terms: Vec<String>,
}

impl Taxonomy {
    /// Build a taxonomy, lowercasing terms and dropping blanks and repeats.
    ///
    /// The first occurrence of a term fixes its position.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() || ordered.contains(&term) {
                continue;
            }
            ordered.push(term);
        }
        Self { terms: ordered }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }
}

/// Partial mapping from taxonomy terms to remediation tips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipCatalog {
    tips: HashMap<String, String>,
}

impl TipCatalog {
    pub fn new(tips: HashMap<String, String>) -> Self {
        let tips = tips
            .into_iter()
            .map(|(term, tip)| (term.trim().to_lowercase(), tip))
            .collect();
        Self { tips }
    }

    /// Tip for a term, if the catalog has a non-empty one.
    pub fn tip_for(&self, term: &str) -> Option<&str> {
        self.tips
            .get(term)
            .map(String::as_str)
            .filter(|tip| !tip.is_empty())
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Catalog keys that are not taxonomy terms, sorted.
    pub fn orphans(&self, taxonomy: &Taxonomy) -> Vec<String> {
        let mut orphans: Vec<String> = self
            .tips
            .keys()
            .filter(|term| !taxonomy.contains(term))
            .cloned()
            .collect();
        orphans.sort();
        orphans
    }
}

/// Everything the classification engine reads at request time.
#[derive(Debug, Clone, Default)]
pub struct KeywordTables {
    pub taxonomy: Taxonomy,
    pub catalog: TipCatalog,
    /// Financial subset that triggers the secure-sharing guide offer.
    pub howto_terms: Vec<String>,
}

impl KeywordTables {
    pub fn from_config(config: &PrivacyConfig) -> Self {
        let taxonomy = Taxonomy::new(&config.keywords);
        let catalog = TipCatalog::new(config.tips.clone());

        let orphans = catalog.orphans(&taxonomy);
        if !orphans.is_empty() {
            tracing::warn!(
                terms = ?orphans,
                "Tip catalog has entries for terms outside the taxonomy"
            );
        }

        if taxonomy.is_empty() {
            tracing::warn!("Keyword taxonomy is empty - every text will be rated as no risk");
        } else if catalog.is_empty() {
            tracing::warn!("Tip catalog is empty - every match gets the fallback tip");
        }

        let howto_terms = Taxonomy::new(&config.howto_keywords).terms;

        tracing::debug!(
            terms = taxonomy.len(),
            tips = catalog.len(),
            howto_terms = howto_terms.len(),
            "Keyword tables built"
        );

        Self {
            taxonomy,
            catalog,
            howto_terms,
        }
    }
}
