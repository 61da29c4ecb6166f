//! Configuration module for Achtung Core.
//!
//! Loads configuration from YAML files and environment variables.
//! Every section falls back to built-in defaults, so the service starts
//! without any config file present.

use std::collections::HashMap;

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub privacy: PrivacyConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Keyword taxonomy and tip catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Risk-indicating terms. Order is significant: matches are reported
    /// in this order.
    pub keywords: Vec<String>,
    /// Remediation tip per term. Terms without an entry have no specific tip.
    pub tips: HashMap<String, String>,
    /// Financial terms that trigger the secure-sharing guide offer.
    pub howto_keywords: Vec<String>,
}

/// Rewrite collaborator (OpenAI-compatible chat completions).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Whether rewriting is offered at all.
    pub enabled: bool,
    /// Bearer key for the completions endpoint.
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: String::new(),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 30,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl LlmConfig {
    /// Rewriting needs both the switch and a key.
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ACHTUNG__*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("ACHTUNG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        let keywords = [
            "kreditkarte",
            "kreditkartennummer",
            "kreditkarten-nummer",
            "kartennummer",
            "iban",
            "kontonummer",
            "bankverbindung",
            "passwort",
            "login",
            "token",
            "diagnose",
            "krankheit",
            "medikament",
            "gesundheit",
            "depression",
            "trauma",
            "suizid",
            "chef",
            "adresse",
            "kind",
            "schule",
            "whatsapp",
            "screenshot",
            "urlaub",
            "standort",
        ];

        let tips = [
            (
                "kreditkarte",
                "💳 Nutze <a href='https://privacy.com' target='_blank'>Privacy.com</a> oder <a href='https://www.apple.com/apple-pay/' target='_blank'>Apple Pay</a>. <a href='/hilfe-kreditkarte.html'>Mehr erfahren</a>",
            ),
            (
                "iban",
                "🏦 Übermittle deine IBAN nur verschlüsselt. <a href='/hilfe-iban.html'>Mehr erfahren</a>",
            ),
            (
                "passwort",
                "🔐 Niemals öffentlich teilen. <a href='/hilfe-passwort.html'>So schützt du deine Logins</a>",
            ),
            (
                "depression",
                "🧠 Psychische Gesundheit braucht Schutz. <a href='/hilfe-depression.html'>Hilfreiche Tipps</a>",
            ),
            (
                "suizid",
                "📞 Hilfe findest du anonym bei <a href='https://www.telefonseelsorge.de'>telefonseelsorge.de</a>",
            ),
            (
                "kind",
                "👶 Persönliche Daten von Kindern nie veröffentlichen. <a href='/hilfe-kinder.html'>Warum?</a>",
            ),
            (
                "medikament",
                "💊 Gesundheitsangaben vertraulich teilen. <a href='/hilfe-medikament.html'>Mehr erfahren</a>",
            ),
            (
                "whatsapp",
                "📱 Datenschutzeinstellungen aktivieren! <a href='/hilfe-whatsapp.html'>So geht's</a>",
            ),
            (
                "screenshot",
                "🖼️ Metadaten entfernen vor dem Teilen. <a href='/hilfe-screenshot.html'>Anleitung</a>",
            ),
            (
                "urlaub",
                "🏖️ Urlaub posten? Nur sicher. <a href='/hilfe-urlaub.html'>Risiken & Tipps</a>",
            ),
            (
                "chef",
                "💼 Kritik nur privat äußern. <a href='/hilfe-chef.html'>Warum das wichtig ist</a>",
            ),
            (
                "standort",
                "📍 Teile deinen Standort nicht öffentlich. <a href='/hilfe-standort.html'>Mehr dazu</a>",
            ),
        ];

        let howto_keywords = [
            "iban",
            "kreditkarte",
            "kreditkartennummer",
            "kreditkarten-nummer",
        ];

        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            tips: tips
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            howto_keywords: howto_keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_privacy_config() {
        let config = PrivacyConfig::default();
        assert_eq!(config.keywords.len(), 25);
        assert_eq!(config.tips.len(), 12);
        assert_eq!(config.howto_keywords.len(), 4);
        assert_eq!(config.keywords[0], "kreditkarte");
        assert_eq!(config.keywords[24], "standort");
    }

    #[test]
    fn test_tip_keys_are_taxonomy_terms() {
        let config = PrivacyConfig::default();
        for key in config.tips.keys() {
            assert!(
                config.keywords.contains(key),
                "tip key '{}' is not in the taxonomy",
                key
            );
        }
    }

    #[test]
    fn test_howto_keywords_are_lowercase() {
        let config = PrivacyConfig::default();
        for kw in &config.howto_keywords {
            assert_eq!(kw, &kw.to_lowercase());
        }
    }

    #[test]
    fn test_llm_usable_requires_key() {
        let mut llm = LlmConfig::default();
        assert!(!llm.is_usable());

        llm.enabled = true;
        assert!(!llm.is_usable());

        llm.api_key = "sk-test".to_string();
        assert!(llm.is_usable());
    }

    #[test]
    fn test_default_server_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
    }
}
