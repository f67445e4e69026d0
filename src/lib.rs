//! # Aquanet - Aquaculture Advisory Chat Assistant
//!
//! Aquanet wraps a remote LLM chat API behind a domain-specific advisory
//! persona for aquaculture businesses. It validates persona configuration
//! (including cross-field rules like species/farming-method compatibility),
//! composes system and task prompts deterministically, and normalizes both
//! buffered and streamed chat responses into a single return shape.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aquanet::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BotConfig::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let bot = AquanetBot::new(config)?;
//!     let answer = bot.query("How do I raise pond pH safely?").await?;
//!     println!("{answer}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming
//!
//! ```rust,no_run
//! use aquanet::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BotConfig::builder()
//!         .api_key("your-api-key")
//!         .response_mode(ResponseMode::Streamed)
//!         .on_chunk(|delta| print!("{delta}"))
//!         .build()?;
//!
//!     let bot = AquanetBot::new(config)?;
//!     let full_text = bot.query("Explain biofloc systems.").await?;
//!     assert!(!full_text.is_empty());
//!
//!     Ok(())
//! }
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod providers;
pub mod registry;
pub mod service;
pub mod types;
pub(crate) mod utils;

pub use client::{AquanetBot, ChatOutput};
pub use config::{AquacultureConfig, BotConfig, ResponseMode};
pub use error::LlmError;
pub use prompt::TaskType;
pub use registry::ProviderRegistry;
pub use service::AquacultureService;

/// Commonly used items.
pub mod prelude {
    pub use crate::client::{AquanetBot, ChatOutput};
    pub use crate::config::{
        AnswerValidation, AquacultureConfig, BotConfig, Customization, DataSource, ExpertiseLevel,
        KnowledgeDomain, Language, ResponseMode, ToolIntegrations,
    };
    pub use crate::error::LlmError;
    pub use crate::prompt::{TaskType, compose_system_prompt};
    pub use crate::providers::{DeepSeekProvider, LlmProvider};
    pub use crate::registry::ProviderRegistry;
    pub use crate::service::AquacultureService;
    pub use crate::types::{
        AquacultureData, BiologicalData, ChatMessage, ChatResponse, CommonParams,
        EnvironmentalData, LlmConfig, LlmInput, LlmOutput, MessageRole, ProviderId, Usage,
        WaterQualityReadings,
    };
}
