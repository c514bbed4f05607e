// src/services/ollama.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ChatError;
use crate::message::Message;

/// Chat endpoint of the local Ollama instance.
pub const OLLAMA_CHAT_URL: &str = "http://localhost:11434/api/chat";

/// Sends one chat request and returns the assistant content or the failure.
///
/// Both the terminal client and the relay go through this, so a stub can
/// stand in for a live Ollama instance in tests.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_chat(&self, model: &str, messages: &[Message]) -> Result<String, ChatError>;
}

#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
}

/// Raw Ollama `/api/chat` response shape. Error bodies (Ollama's own, or a
/// relayed `{error, details}` envelope) deserialize into the same struct.
#[derive(Deserialize)]
struct OllamaChatResponse {
    message: Option<OllamaMessage>,
    error: Option<String>,
    details: Option<String>,
}

#[derive(Deserialize)]
struct OllamaMessage {
    #[serde(default)]
    content: String,
}

impl OllamaChatResponse {
    /// Detail text of an embedded error, preferring `details` over `error`.
    fn error_detail(&self) -> Option<String> {
        match (&self.error, &self.details) {
            (Some(_), Some(details)) => Some(details.clone()),
            (Some(error), None) => Some(error.clone()),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn new() -> Self {
        Self::with_endpoint(OLLAMA_CHAT_URL)
    }

    /// Point the client at a non-default chat endpoint (stub servers in tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for OllamaClient {
    async fn send_chat(&self, model: &str, messages: &[Message]) -> Result<String, ChatError> {
        let payload = OllamaChatRequest {
            model,
            messages,
            stream: false,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ChatError::Network(e.to_string()))?;
            // Ollama reports errors as JSON; fall back to the raw body.
            let detail = serde_json::from_str::<OllamaChatResponse>(&body)
                .ok()
                .and_then(|parsed| parsed.error_detail())
                .unwrap_or_else(|| format!("Ollama API error: {body}"));
            return Err(ChatError::Upstream(detail));
        }

        let parsed: OllamaChatResponse = response
            .json()
            .await
            .map_err(|_| ChatError::Upstream("Invalid response format from Ollama".to_string()))?;

        if let Some(detail) = parsed.error_detail() {
            return Err(ChatError::Upstream(detail));
        }

        match parsed.message {
            Some(message) if !message.content.is_empty() => Ok(message.content),
            _ => Err(ChatError::Upstream(
                "Invalid response format from Ollama".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_prefers_details_field() {
        let parsed: OllamaChatResponse =
            serde_json::from_str(r#"{"error":"boom","details":"bad model"}"#).unwrap();
        assert_eq!(parsed.error_detail().as_deref(), Some("bad model"));

        let parsed: OllamaChatResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(parsed.error_detail().as_deref(), Some("boom"));

        let parsed: OllamaChatResponse =
            serde_json::from_str(r#"{"message":{"content":"hi"}}"#).unwrap();
        assert_eq!(parsed.error_detail(), None);
    }
}
