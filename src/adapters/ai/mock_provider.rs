//! Scriptable AiProvider double for tests.
//!
//! Outcomes are queued up front and consumed in order; every request is
//! recorded so tests can inspect the prompts the narrative service built.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, TokenUsage,
};

/// Model name reported by scripted completions.
const MOCK_MODEL: &str = "mock-model-1";

/// Test double that replays a scripted sequence of outcomes.
///
/// Once the script runs dry, further calls succeed with a canned line, so
/// tests that do not care about the text never have to script it.
#[derive(Debug, Clone, Default)]
pub struct MockAiProvider {
    script: Arc<Mutex<VecDeque<Result<String, AiError>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockAiProvider {
    /// An empty script with no latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful completion.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.script.lock().unwrap().push_back(Ok(content.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: AiError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Adds simulated latency to every call, for exercising busy-state
    /// guards.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Requests seen so far.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests seen so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let outcome = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Scripted mock response".to_string()));

        outcome.map(|content| CompletionResponse {
            content,
            model: MOCK_MODEL.to_string(),
            finish_reason: FinishReason::Stop,
            usage: TokenUsage::new(10, 20),
        })
    }
}
