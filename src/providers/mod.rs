//! LLM provider abstraction.
//!
//! Providers implement a small capability interface; the registry owns
//! initialized instances behind it. Adding a provider means adding a new
//! implementation and a factory arm, not touching the registry or the
//! prompt composers.

pub mod deepseek;

pub use deepseek::DeepSeekProvider;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::{LlmConfig, LlmInput, LlmOutput, OnChunk};

/// Capability interface implemented by every chat provider.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Validate and adopt the configuration, building the HTTP client.
    /// Must succeed before any query is accepted.
    async fn initialize(&mut self, config: LlmConfig) -> Result<(), LlmError>;

    /// Check provider-specific required fields without side effects.
    fn validate_config(&self, config: &LlmConfig) -> Result<(), LlmError>;

    /// Execute a buffered completion request.
    async fn query(&self, input: LlmInput) -> Result<LlmOutput, LlmError>;

    /// Execute a streamed completion request, forwarding each content delta
    /// to `on_chunk` and returning the accumulated text.
    async fn stream_query(&self, input: LlmInput, on_chunk: OnChunk) -> Result<String, LlmError>;
}
