//! Narrative-provider configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Settings for the generative-text call behind the dashboard.
///
/// The credential is deliberately optional. A room without one still runs
/// the whole survey; only the narrative degrades, to the fixed fallback
/// text.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Anthropic API key.
    pub anthropic_api_key: Option<String>,

    /// Model used for narrative generation.
    #[serde(default = "default_model")]
    pub model: String,

    /// Deadline for one provider call, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Token budget per narrative.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl AiConfig {
    /// The call deadline as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when a non-blank credential is configured.
    pub fn has_credentials(&self) -> bool {
        self.anthropic_api_key
            .as_ref()
            .is_some_and(|key| !key.is_empty())
    }

    /// Checks the section; a missing credential passes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if self.model.is_empty() {
            return Err(ValidationError::MissingRequired("AI_MODEL"));
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            model: default_model(),
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "claude-3-5-haiku-20241022".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_max_tokens() -> u32 {
    1024
}
