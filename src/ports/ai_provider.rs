//! Port for the generative-text provider behind the narrative service.
//!
//! One prompt goes out, one markdown completion comes back; no
//! conversation state survives between calls. The narrative service makes
//! exactly one attempt per invocation and degrades to a fixed fallback
//! string on any error, so implementations report failures precisely and
//! never retry on their own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Token budget applied when a request does not set one.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// A generative-text backend.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Runs one completion. A single attempt; no implementation retries.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError>;
}

/// One completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The user prompt.
    pub prompt: String,
    /// Instructions framing how the model should answer.
    pub system: Option<String>,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Starts a request with the default token budget.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Sets the system instructions.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Sets the token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// One completed generation.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// The generated markdown text.
    pub content: String,
    /// Model that produced it.
    pub model: String,
    /// Whether generation ended naturally or hit the token budget.
    pub finish_reason: FinishReason,
    /// Token accounting, logged for diagnostics.
    pub usage: TokenUsage,
}

/// Token accounting for one completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt.
    pub input_tokens: u32,
    /// Tokens generated.
    pub output_tokens: u32,
}

impl TokenUsage {
    /// Bundles input and output counts.
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Total tokens billed for the call.
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The model finished on its own.
    Stop,
    /// The token budget cut the text short.
    Length,
}

/// Everything that can go wrong talking to a provider.
///
/// Cloneable so test doubles can script error sequences up front.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AiError {
    /// No credential configured; the call was never attempted.
    #[error("no API credential configured")]
    MissingCredentials,

    /// The provider rejected the credential.
    #[error("provider rejected the API credential")]
    AuthenticationFailed,

    /// Throttled; the provider suggested when to come back.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// The provider reported a server-side failure.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The request never reached the provider.
    #[error("network failure: {0}")]
    Network(String),

    /// The provider answered with something we could not decode.
    #[error("unreadable provider response: {0}")]
    Parse(String),

    /// The provider rejected the request as malformed.
    #[error("provider rejected the request: {0}")]
    InvalidRequest(String),

    /// No answer within the configured deadline.
    #[error("no response within {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl AiError {
    /// Throttled response with a retry hint.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Server-side provider failure.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Transport-level failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Undecodable response body.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_fills_every_field() {
        let request = CompletionRequest::new("Summarize the room")
            .with_system("You are a management trainer")
            .with_max_tokens(512);

        assert_eq!(request.prompt, "Summarize the room");
        assert_eq!(request.system.as_deref(), Some("You are a management trainer"));
        assert_eq!(request.max_tokens, 512);
    }

    #[test]
    fn request_defaults_to_the_standard_token_budget() {
        let request = CompletionRequest::new("Hi");
        assert_eq!(request.max_tokens, DEFAULT_MAX_TOKENS);
        assert!(request.system.is_none());
    }

    #[test]
    fn usage_totals_both_directions() {
        let usage = TokenUsage::new(100, 50);
        assert_eq!(usage.total(), 150);
    }

    #[test]
    fn finish_reason_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&FinishReason::Stop).unwrap(),
            "\"stop\""
        );
        assert_eq!(
            serde_json::to_string(&FinishReason::Length).unwrap(),
            "\"length\""
        );
    }

    #[test]
    fn errors_render_operator_readable_messages() {
        assert_eq!(
            AiError::rate_limited(30).to_string(),
            "rate limited, retry after 30s"
        );
        assert_eq!(
            AiError::MissingCredentials.to_string(),
            "no API credential configured"
        );
        assert_eq!(
            AiError::Timeout { timeout_secs: 60 }.to_string(),
            "no response within 60s"
        );
    }
}
