//! The aquaculture chat bot client.

use serde_json::json;

use crate::config::{BotConfig, ResponseMode};
use crate::error::LlmError;
use crate::prompt::compose_system_prompt;
use crate::types::{ChatMessage, ChatResponse};
use crate::utils::streaming;

/// Result of a chat exchange, shaped by the configured response mode.
#[derive(Debug, Clone)]
pub enum ChatOutput {
    /// Complete reply returned in one exchange.
    Buffered(ChatResponse),
    /// Accumulated text of a streamed reply.
    Streamed(String),
}

impl ChatOutput {
    /// Reply text regardless of mode.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Buffered(response) => response.content_text(),
            Self::Streamed(text) => Some(text),
        }
    }
}

/// Aquaculture advisory chat client.
///
/// Validates its configuration on construction, derives the default system
/// prompt once, and normalizes buffered and streamed responses into
/// [`ChatOutput`].
pub struct AquanetBot {
    config: BotConfig,
    http_client: reqwest::Client,
    default_system_prompt: String,
}

impl AquanetBot {
    /// Create a bot from a configuration.
    ///
    /// Fails if the configuration or its domain block is invalid; a
    /// partially valid domain block never degrades to "no domain config".
    pub fn new(config: BotConfig) -> Result<Self, LlmError> {
        config.validate()?;
        let default_system_prompt = compose_system_prompt(&config);
        Ok(Self {
            config,
            http_client: reqwest::Client::new(),
            default_system_prompt,
        })
    }

    /// The system prompt used when no per-call override is given.
    pub fn default_system_prompt(&self) -> &str {
        &self.default_system_prompt
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Execute a chat exchange in the configured response mode.
    ///
    /// The resolved system prompt (override, else the composed default) is
    /// sent first, followed by `messages` in order. In streamed mode the
    /// configured `on_chunk` callback observes every content delta in
    /// arrival order and the accumulated text is returned; a mid-stream
    /// transport failure discards the partial accumulator.
    pub async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        system_prompt: Option<&str>,
    ) -> Result<ChatOutput, LlmError> {
        let streamed = self.config.response_mode == ResponseMode::Streamed;

        let mut request_messages = Vec::with_capacity(messages.len() + 1);
        request_messages.push(ChatMessage::system(
            system_prompt.unwrap_or(&self.default_system_prompt),
        ));
        request_messages.extend(messages);

        let body = json!({
            "model": self.config.model,
            "messages": request_messages,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "stream": streamed,
        });

        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::HttpError(format!("Failed to send request: {e}")))?;

        if !response.status().is_success() {
            return Err(streaming::error_from_response(response).await);
        }

        if streamed {
            let text =
                streaming::collect_stream(response, self.config.on_chunk.as_deref()).await?;
            Ok(ChatOutput::Streamed(text))
        } else {
            let parsed: ChatResponse = response
                .json()
                .await
                .map_err(|e| LlmError::ParseError(format!("Failed to parse chat response: {e}")))?;
            Ok(ChatOutput::Buffered(parsed))
        }
    }

    /// Send a single user prompt and return the reply text.
    pub async fn query(&self, prompt: &str) -> Result<String, LlmError> {
        let output = self.chat(vec![ChatMessage::user(prompt)], None).await?;
        Ok(output.text().unwrap_or_default().to_string())
    }
}
