//! Bot configuration: structural defaults plus cross-field validation.
//!
//! Validation runs in two phases. Phase one is structural: serde (or the
//! builder) shapes the raw input and fills the documented defaults. Phase two
//! runs the ordered cross-field checks in [`validation`] over the fully
//! shaped domain block. A failure in either phase aborts construction of the
//! whole configuration; a partially valid domain block never degrades to
//! "no domain config".

pub mod aquaculture;
pub(crate) mod validation;

pub use aquaculture::*;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::providers::deepseek::DEFAULT_BASE_URL;
use crate::types::OnChunk;

pub const DEFAULT_MODEL: &str = "deepseek-chat";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// How chat responses are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Complete reply in one exchange.
    #[default]
    Buffered,
    /// Incremental delivery, reassembled into one string.
    Streamed,
}

/// Validated bot configuration.
///
/// Immutable once validated; construct it through [`BotConfig::builder`] or
/// deserialize it and pass it to a constructor that validates.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub default_prompt: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub response_mode: ResponseMode,
    #[serde(skip)]
    pub on_chunk: Option<OnChunk>,
    #[serde(default)]
    pub aquaculture: Option<AquacultureConfig>,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("default_prompt", &self.default_prompt)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("response_mode", &self.response_mode)
            .field("on_chunk", &self.on_chunk.as_ref().map(|_| "<callback>"))
            .field("aquaculture", &self.aquaculture)
            .finish()
    }
}

impl BotConfig {
    pub fn builder() -> BotConfigBuilder {
        BotConfigBuilder::default()
    }

    /// Validate field constraints, then the domain block if present.
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::ConfigurationError(
                "API key cannot be empty".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(LlmError::ConfigurationError(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }
        if self.model.is_empty() {
            return Err(LlmError::ConfigurationError(
                "Model cannot be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(LlmError::ConfigurationError(format!(
                "Temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(LlmError::ConfigurationError(
                "Max tokens must be positive".to_string(),
            ));
        }
        if let Some(aquaculture) = &self.aquaculture {
            validation::validate_domain(aquaculture)?;
        }
        Ok(())
    }
}

/// Builder for [`BotConfig`]. Unset fields take the documented defaults;
/// `build` validates the result.
#[derive(Default)]
pub struct BotConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    default_prompt: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    response_mode: ResponseMode,
    on_chunk: Option<OnChunk>,
    aquaculture: Option<AquacultureConfig>,
}

impl BotConfigBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn default_prompt(mut self, default_prompt: impl Into<String>) -> Self {
        self.default_prompt = Some(default_prompt.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn response_mode(mut self, response_mode: ResponseMode) -> Self {
        self.response_mode = response_mode;
        self
    }

    /// Register a callback invoked with each streamed content delta.
    pub fn on_chunk<F>(mut self, on_chunk: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_chunk = Some(std::sync::Arc::new(on_chunk));
        self
    }

    pub fn aquaculture(mut self, aquaculture: AquacultureConfig) -> Self {
        self.aquaculture = Some(aquaculture);
        self
    }

    /// Apply defaults and validate the assembled configuration.
    pub fn build(self) -> Result<BotConfig, LlmError> {
        let config = BotConfig {
            api_key: self.api_key.ok_or_else(|| {
                LlmError::ConfigurationError("API key is required".to_string())
            })?,
            base_url: self.base_url.unwrap_or_else(default_base_url),
            model: self.model.unwrap_or_else(default_model),
            default_prompt: self.default_prompt,
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            response_mode: self.response_mode,
            on_chunk: self.on_chunk,
            aquaculture: self.aquaculture,
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

const fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

const fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}
