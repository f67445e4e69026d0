//! DeepSeek provider, speaking the OpenAI-compatible chat completions
//! protocol.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::LlmProvider;
use crate::error::LlmError;
use crate::types::{
    ChatResponse, LlmConfig, LlmInput, LlmOutput, OnChunk, OutputMetadata, ProviderId,
};
use crate::utils::streaming;

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// DeepSeek chat provider. Unusable until [`LlmProvider::initialize`]
/// succeeds; every operation before that fails fast.
#[derive(Default)]
pub struct DeepSeekProvider {
    state: Option<ProviderState>,
}

struct ProviderState {
    config: LlmConfig,
    base_url: String,
    http_client: reqwest::Client,
}

impl DeepSeekProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<&ProviderState, LlmError> {
        self.state.as_ref().ok_or_else(|| {
            LlmError::ProviderNotInitialized(
                "DeepSeek provider must be initialized before use".to_string(),
            )
        })
    }

    fn check_input(input: &LlmInput) -> Result<(), LlmError> {
        if input.prompt.is_empty() {
            return Err(LlmError::InvalidParameter(
                "Prompt cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn build_request_body(state: &ProviderState, input: &LlmInput, stream: bool) -> serde_json::Value {
        let params = &state.config.common_params;
        let mut body = json!({
            "model": state.config.model,
            "messages": [
                { "role": "system", "content": input.system_prompt.clone().unwrap_or_default() },
                { "role": "user", "content": input.prompt },
            ],
            "temperature": input.temperature.or(params.temperature).unwrap_or(DEFAULT_TEMPERATURE),
            "max_tokens": input.max_tokens.or(params.max_tokens).unwrap_or(DEFAULT_MAX_TOKENS),
            "stream": stream,
        });
        if let Some(top_p) = params.top_p {
            body["top_p"] = json!(top_p);
        }
        body
    }

    async fn send_chat_request(
        &self,
        body: serde_json::Value,
    ) -> Result<reqwest::Response, LlmError> {
        let state = self.state()?;
        let url = format!("{}/chat/completions", state.base_url.trim_end_matches('/'));
        let response = state
            .http_client
            .post(&url)
            .bearer_auth(&state.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::HttpError(format!("Failed to send request: {e}")))?;

        if !response.status().is_success() {
            return Err(streaming::error_from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait]
impl LlmProvider for DeepSeekProvider {
    async fn initialize(&mut self, config: LlmConfig) -> Result<(), LlmError> {
        self.validate_config(&config)?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| LlmError::HttpError(format!("Failed to create HTTP client: {e}")))?;

        self.state = Some(ProviderState {
            config,
            base_url,
            http_client,
        });
        Ok(())
    }

    fn validate_config(&self, config: &LlmConfig) -> Result<(), LlmError> {
        if config.provider != ProviderId::DeepSeek {
            return Err(LlmError::ConfigurationError(format!(
                "Provider mismatch: expected deepseek, got {}",
                config.provider
            )));
        }
        config.validate()
    }

    async fn query(&self, input: LlmInput) -> Result<LlmOutput, LlmError> {
        let state = self.state()?;
        Self::check_input(&input)?;

        let body = Self::build_request_body(state, &input, false);
        let response = self.send_chat_request(body).await?;
        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(format!("Failed to parse chat response: {e}")))?;

        Ok(LlmOutput {
            content: chat.content_text().unwrap_or_default().to_string(),
            metadata: OutputMetadata {
                provider: ProviderId::DeepSeek,
                model: state.config.model.clone(),
                usage: Some(chat.usage),
            },
        })
    }

    async fn stream_query(&self, input: LlmInput, on_chunk: OnChunk) -> Result<String, LlmError> {
        let state = self.state()?;
        Self::check_input(&input)?;

        let body = Self::build_request_body(state, &input, true);
        let response = self.send_chat_request(body).await?;
        streaming::collect_stream(response, Some(on_chunk.as_ref())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommonParams;

    fn config() -> LlmConfig {
        LlmConfig {
            provider: ProviderId::DeepSeek,
            api_key: "test-key".to_string(),
            base_url: None,
            model: "deepseek-chat".to_string(),
            common_params: CommonParams::default(),
            timeout: None,
        }
    }

    #[test]
    fn validate_config_rejects_provider_mismatch() {
        let provider = DeepSeekProvider::new();
        let bad = LlmConfig {
            provider: ProviderId::OpenAi,
            ..config()
        };
        assert!(matches!(
            provider.validate_config(&bad),
            Err(LlmError::ConfigurationError(_))
        ));
    }

    #[test]
    fn validate_config_rejects_missing_credentials() {
        let provider = DeepSeekProvider::new();
        let no_key = LlmConfig {
            api_key: String::new(),
            ..config()
        };
        assert!(provider.validate_config(&no_key).is_err());

        let no_model = LlmConfig {
            model: String::new(),
            ..config()
        };
        assert!(provider.validate_config(&no_model).is_err());
    }

    #[tokio::test]
    async fn query_before_initialize_fails_fast() {
        let provider = DeepSeekProvider::new();
        let result = provider.query(LlmInput::new("hello")).await;
        assert!(matches!(
            result,
            Err(LlmError::ProviderNotInitialized(_))
        ));
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected() {
        let mut provider = DeepSeekProvider::new();
        provider.initialize(config()).await.unwrap();
        let result = provider.query(LlmInput::new("")).await;
        assert!(matches!(result, Err(LlmError::InvalidParameter(_))));
    }
}
