//! Shared SSE decoding for streamed chat responses.
//!
//! The completion endpoint frames streamed bodies as newline-delimited,
//! `data: `-prefixed segments terminated either by end-of-stream or a
//! `[DONE]` sentinel segment. `eventsource-stream` handles the framing and
//! UTF-8 boundaries over the raw byte stream.

use eventsource_stream::Eventsource;
use futures_util::StreamExt;

use crate::error::LlmError;
use crate::types::StreamChunk;

pub(crate) const STREAM_DONE: &str = "[DONE]";

/// Drain a streamed response body, forwarding each content delta to
/// `on_chunk` and returning the accumulated text.
///
/// Malformed segments are skipped with a warning and never abort the
/// stream. A transport failure aborts the whole operation, discarding the
/// partial accumulator. The reading handle is the event stream itself and
/// is released when it drops, on every exit path.
pub(crate) async fn collect_stream(
    response: reqwest::Response,
    on_chunk: Option<&(dyn Fn(&str) + Send + Sync)>,
) -> Result<String, LlmError> {
    let mut events = response.bytes_stream().eventsource();
    let mut result = String::new();

    while let Some(event) = events.next().await {
        let event =
            event.map_err(|e| LlmError::StreamError(format!("SSE transport error: {e}")))?;
        let data = event.data.trim();
        if data == STREAM_DONE {
            break;
        }
        if data.is_empty() {
            continue;
        }

        let chunk: StreamChunk = match serde_json::from_str(data) {
            Ok(chunk) => chunk,
            Err(e) => {
                tracing::warn!("Failed to parse stream chunk: {e}");
                continue;
            }
        };

        if let Some(content) = chunk
            .choices
            .first()
            .and_then(|choice| choice.delta.content.as_deref())
        {
            if !content.is_empty() {
                result.push_str(content);
                if let Some(on_chunk) = on_chunk {
                    on_chunk(content);
                }
            }
        }
    }

    Ok(result)
}

/// Map a non-success response to an error, preferring the upstream error
/// body over the generic transport text.
pub(crate) async fn error_from_response(response: reqwest::Response) -> LlmError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let details = serde_json::from_str::<serde_json::Value>(&body).ok();
    let message = details
        .as_ref()
        .and_then(upstream_message)
        .unwrap_or_else(|| format!("HTTP {status}: {body}"));
    LlmError::ApiError {
        code: status.as_u16(),
        message,
        details,
    }
}

fn upstream_message(body: &serde_json::Value) -> Option<String> {
    match body.get("error")? {
        serde_json::Value::String(message) => Some(message.clone()),
        value => value
            .get("message")
            .and_then(|message| message.as_str())
            .map(str::to_string),
    }
}
