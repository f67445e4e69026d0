//! Provider-facing configuration and request/response types.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::chat::Usage;
use crate::error::LlmError;

/// Callback invoked with each streamed content delta, in arrival order.
pub type OnChunk = Arc<dyn Fn(&str) + Send + Sync>;

/// Supported LLM provider identifiers.
///
/// Only DeepSeek currently has a concrete implementation; the other
/// identifiers are reserved and rejected by the provider factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    DeepSeek,
    OpenAi,
    Gemini,
    Anthropic,
}

impl ProviderId {
    /// Token used in registry keys and serialized configuration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeepSeek => "deepseek",
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
            Self::Anthropic => "anthropic",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampling parameters shared by all requests built from a provider config.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CommonParams {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f32>,
}

/// Configuration for a single provider/model pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmConfig {
    pub provider: ProviderId,
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    pub model: String,
    #[serde(default)]
    pub common_params: CommonParams,
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl LlmConfig {
    /// Check the provider-agnostic required fields.
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::ConfigurationError(
                "API key cannot be empty".to_string(),
            ));
        }
        if self.model.is_empty() {
            return Err(LlmError::ConfigurationError(
                "Model cannot be empty".to_string(),
            ));
        }
        if let Some(base_url) = &self.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(LlmError::ConfigurationError(
                    "Base URL must start with http:// or https://".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Input for a single provider query.
#[derive(Debug, Clone, Default)]
pub struct LlmInput {
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl LlmInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Output of a single provider query.
#[derive(Debug, Clone)]
pub struct LlmOutput {
    pub content: String,
    pub metadata: OutputMetadata,
}

/// Provenance attached to a provider response.
#[derive(Debug, Clone)]
pub struct OutputMetadata {
    pub provider: ProviderId,
    pub model: String,
    pub usage: Option<Usage>,
}
