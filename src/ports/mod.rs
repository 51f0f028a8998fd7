//! Ports: interfaces the application layer depends on, implemented by
//! adapters.

mod ai_provider;

pub use ai_provider::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, TokenUsage,
    DEFAULT_MAX_TOKENS,
};
