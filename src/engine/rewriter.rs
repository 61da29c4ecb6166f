//! Guided rewriting via an OpenAI-compatible chat completions API.
//!
//! The service owns only the prompt contract and output trimming. The
//! generative model behind the endpoint is an opaque collaborator.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::LlmConfig;

/// System instruction: reword instead of censoring.
pub const SYSTEM_PROMPT: &str = "Du hilfst Nutzer:innen, sensible oder riskante Aussagen so umzuformulieren, \
dass sie sicher, respektvoll und datenschutzkonform klingen. \
Statt Zensur schlägst du konkrete Formulierungen vor, \
die dieselbe Botschaft sicherer vermitteln oder alternative, souveräne Wege aufzeigen. \
Wenn angebracht, bietest du Rückfragen oder Empfehlungen an. \
Vermeide KI-Floskeln. Schreibe menschlich, empathisch, klar.";

const USER_PROMPT_PREFIX: &str = "Bitte formuliere diesen Text datenschutzgerecht und hilfreich um: ";

/// Failures of the rewrite collaborator.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("Rewriting is not configured")]
    Disabled,

    #[error("Rewrite request timed out after {0}s")]
    Timeout(u64),

    #[error("Rewrite request failed: {0}")]
    Transport(String),

    #[error("Rewrite API error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to parse rewrite response: {0}")]
    MalformedResponse(String),

    #[error("Rewrite service returned no text")]
    EmptyCompletion,
}

/// Request to the chat completions API.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response from the chat completions API.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// User prompt embedding the text to rewrite.
pub fn user_prompt(text: &str) -> String {
    format!("{}{}", USER_PROMPT_PREFIX, text)
}

/// Extract the rewritten text from a completions response body.
fn parse_completion(body: &str) -> Result<String, RewriteError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| RewriteError::MalformedResponse(e.to_string()))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default();

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(RewriteError::EmptyCompletion);
    }
    Ok(trimmed.to_string())
}

/// Rewrite client. The API key is handed in once at startup.
pub struct LlmRewriter {
    config: LlmConfig,
    client: Client,
}

impl LlmRewriter {
    pub fn new(config: LlmConfig) -> Result<Self, RewriteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RewriteError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_usable()
    }

    fn build_request(&self, text: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt(text),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    /// Rewrite `text` into a safer equivalent.
    pub async fn rewrite(&self, text: &str) -> Result<String, RewriteError> {
        if !self.is_enabled() {
            return Err(RewriteError::Disabled);
        }

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        tracing::debug!(model = %self.config.model, text_len = text.len(), "Sending rewrite request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&self.build_request(text))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RewriteError::Timeout(self.config.timeout_secs)
                } else {
                    RewriteError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                RewriteError::Timeout(self.config.timeout_secs)
            } else {
                RewriteError::Transport(e.to_string())
            }
        })?;

        if !status.is_success() {
            return Err(RewriteError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        parse_completion(&body)
    }
}
