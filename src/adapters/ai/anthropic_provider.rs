//! AiProvider implementation over Anthropic's Messages API.
//!
//! Non-streaming only: the narrative service consumes the whole markdown
//! text at once. One HTTP attempt per call; a failed narrative degrades to
//! fallback text on the dashboard, so retrying here would only delay that.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::AiConfig;
use crate::ports::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, TokenUsage,
};

/// Pinned API version header.
const API_VERSION: &str = "2023-06-01";

/// Connection settings for the Anthropic backend.
///
/// The key is optional: without one every call fails fast with
/// [`AiError::MissingCredentials`] and never touches the network, which is
/// the tolerated degraded mode for a room running without AI.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    api_key: Option<Secret<String>>,
    /// Model used for narrative generation.
    pub model: String,
    /// API origin, overridable for tests.
    pub base_url: String,
    /// Deadline for one request.
    pub timeout: Duration,
}

impl AnthropicConfig {
    /// Settings with an optional key; blank keys count as absent.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()).map(Secret::new),
            model: "claude-3-5-haiku-20241022".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Settings taken from the application's AI config section.
    pub fn from_app_config(config: &AiConfig) -> Self {
        Self::new(config.anthropic_api_key.clone())
            .with_model(config.model.clone())
            .with_timeout(config.timeout())
    }

    /// Overrides the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API origin.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Overrides the request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

/// Messages-API client implementing the completion port.
pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    /// Builds the provider and its HTTP client.
    pub fn new(config: AnthropicConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("reqwest client construction only fails on TLS misconfiguration");

        Self { config, client }
    }

    /// Issues the one POST to `/v1/messages`.
    async fn post_messages(&self, request: &CompletionRequest) -> Result<reqwest::Response, AiError> {
        let api_key = self.config.api_key().ok_or(AiError::MissingCredentials)?;

        let body = MessagesRequest {
            model: &self.config.model,
            messages: vec![WireMessage {
                role: "user",
                content: &request.prompt,
            }],
            system: request.system.as_deref(),
            max_tokens: request.max_tokens,
        };

        self.client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AiError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else {
                    AiError::network(err.to_string())
                }
            })
    }

    /// Decodes a successful body into the port's response type.
    async fn decode(&self, response: reqwest::Response) -> Result<CompletionResponse, AiError> {
        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|err| AiError::parse(err.to_string()))?;

        let content = body
            .content
            .into_iter()
            .filter(|block| block.block_type == "text")
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(CompletionResponse {
            content,
            model: body.model,
            finish_reason: finish_reason_from(body.stop_reason.as_deref()),
            usage: TokenUsage::new(body.usage.input_tokens, body.usage.output_tokens),
        })
    }
}

#[async_trait]
impl AiProvider for AnthropicProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        let response = self.post_messages(&request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        self.decode(response).await
    }
}

/// Maps a non-success status plus body onto the port's error taxonomy.
fn status_error(status: StatusCode, body: String) -> AiError {
    match status.as_u16() {
        401 => AiError::AuthenticationFailed,
        429 => AiError::rate_limited(retry_after_hint(&body)),
        400 => AiError::InvalidRequest(body),
        500..=599 => AiError::unavailable(format!("status {}: {}", status.as_u16(), body)),
        _ => AiError::network(format!("unexpected status {}: {}", status.as_u16(), body)),
    }
}

fn finish_reason_from(stop_reason: Option<&str>) -> FinishReason {
    match stop_reason {
        Some("max_tokens") => FinishReason::Length,
        _ => FinishReason::Stop,
    }
}

/// Pulls a "try again in Ns" hint out of a rate-limit body, defaulting to
/// a minute when the message carries none.
fn retry_after_hint(body: &str) -> u32 {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });

    if let Some(message) = message {
        if let Some(rest) = message.split("try again in ").nth(1) {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            if let Ok(secs) = digits.parse() {
                return secs;
            }
        }
    }
    60
}

// Wire types for the Messages API.

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    model: String,
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
    usage: WireUsage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    input_tokens: u32,
    output_tokens: u32,
}
