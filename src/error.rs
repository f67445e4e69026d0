//! Error handling for the aquanet library.
//!
//! All fallible operations return [`LlmError`]. Configuration problems are
//! fatal to construction, request-level problems are fatal to that call, and
//! malformed stream segments are recovered locally (skip and warn) without
//! surfacing here.

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by configuration validation, prompt composition and chat
/// execution.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Invalid or inconsistent configuration. Always fatal to construction;
    /// the message names the violated field or rule.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Unknown provider identifier or task type.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Non-success HTTP status from the completion endpoint. The message
    /// prefers the upstream error description when the body carried one.
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<Value>,
    },

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Undecodable response body.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Streaming transport failure mid-stream.
    #[error("Stream error: {0}")]
    StreamError(String),

    /// Operation invoked before the provider finished initialization.
    #[error("Provider not initialized: {0}")]
    ProviderNotInitialized(String),

    /// Invalid per-call input.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invariant violation inside the library.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl LlmError {
    /// Create an API error without upstream details.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create an API error carrying the upstream error body.
    pub fn api_error_with_details(code: u16, message: impl Into<String>, details: Value) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: Some(details),
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
