//! HTTP access to the Anthropic Messages API for headline generation
//!
//! The assistant turn is prefilled with `[`, so the model continues
//! straight into the JSON array `parse_headlines` expects.

use crate::core::error::{Result, RouletteError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
const API_VERSION: &str = "2023-06-01";

/// Two headlines fit comfortably; a reply that hits this is truncated.
const MAX_TOKENS: u32 = 256;

/// Requests slower than this fall back to the built-in statements.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const ARRAY_PREFILL: &str = "[";

pub struct LlmClient {
    http: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RouletteError::LlmError(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self {
            http,
            api_key,
            api_url,
            model,
        })
    }

    /// Create a client from environment variables
    ///
    /// Required: LLM_API_KEY
    /// Optional: LLM_API_URL, LLM_MODEL
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("LLM_API_KEY")
            .map_err(|_| RouletteError::LlmError("LLM_API_KEY not set".into()))?;
        let api_url = std::env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Self::new(api_key, api_url, model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask for a JSON array and return it as text, opening bracket included
    pub async fn json_array(&self, system: &str, user: &str) -> Result<String> {
        let request = self.request(system, user);
        tracing::debug!("Requesting headlines from {}", self.model);

        let response = self
            .http
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| RouletteError::LlmError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouletteError::LlmError(format!("API error {}: {}", status, body)));
        }

        let reply: MessagesResponse = response
            .json()
            .await
            .map_err(|e| RouletteError::LlmError(e.to_string()))?;
        reply_text(reply)
    }

    fn request<'a>(&'a self, system: &'a str, user: &'a str) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system,
            messages: [
                Message {
                    role: "user",
                    content: user,
                },
                Message {
                    role: "assistant",
                    content: ARRAY_PREFILL,
                },
            ],
        }
    }
}

/// Join the text blocks of a reply behind the prefilled bracket
fn reply_text(reply: MessagesResponse) -> Result<String> {
    if reply.stop_reason.as_deref() == Some("max_tokens") {
        return Err(RouletteError::MalformedStatements(
            "Headline reply was cut off".into(),
        ));
    }

    let text: String = reply
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect();
    if text.trim().is_empty() {
        return Err(RouletteError::LlmError("Empty response".into()));
    }

    Ok(format!("{}{}", ARRAY_PREFILL, text))
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 2],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}
