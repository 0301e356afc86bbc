//! Remote chat-completion client.
//!
//! Wraps a single operation: send a message list plus sampling parameters,
//! unwrap the first choice's reply text. Failures map onto the uniform
//! taxonomy in [`crate::error`]; nothing is retried here.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::traits::TextGeneration;
use crate::types::{ChatOptions, Message};
use crate::{telemetry, BlindboxError, Result};

/// Default chat-completion endpoint (Volcengine Ark, OpenAI-compatible).
pub const DEFAULT_CHAT_ENDPOINT: &str =
    "https://ark.cn-beijing.volces.com/api/v3/chat/completions";

/// Default chat model identifier.
pub const DEFAULT_CHAT_MODEL: &str = "doubao-seed-1-6-flash-250615";

/// Per-call ceiling; an exceeded deadline surfaces as a network error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for a remote OpenAI-compatible chat-completion endpoint.
///
/// Holds only fixed configuration (endpoint URL, bearer credential, model
/// identifier); safe to share across requests.
#[derive(Clone)]
pub struct ChatClient {
    api_key: String,
    model: String,
    endpoint: String,
    http: Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
}

#[derive(Deserialize)]
struct ChatResponse {
    error: Option<serde_json::Value>,
    choices: Option<Vec<ChatChoice>>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl ChatClient {
    /// Create a client against the default Ark endpoint.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, model, DEFAULT_CHAT_ENDPOINT)
    }

    /// Create a client with a custom endpoint URL (configuration or
    /// wiremock tests).
    pub fn with_endpoint(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
            http,
        }
    }

    async fn call(&self, messages: &[Message], options: &ChatOptions) -> Result<String> {
        let payload = ChatRequest {
            model: &self.model,
            messages,
            temperature: options.temperature,
            top_p: options.top_p,
        };
        debug!(
            model = %self.model,
            messages = messages.len(),
            temperature = ?options.temperature,
            top_p = ?options.top_p,
            "calling chat-completion service"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| BlindboxError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| BlindboxError::Network(e.to_string()))?;
            return Err(BlindboxError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| BlindboxError::MalformedResponse(e.to_string()))?;
        debug!("chat-completion reply received");

        // The service may report an error inside a 2xx body.
        if let Some(error) = parsed.error {
            return Err(BlindboxError::Api {
                status: status.as_u16(),
                message: error.to_string(),
            });
        }

        parsed
            .choices
            .and_then(|mut choices| {
                if choices.is_empty() {
                    None
                } else {
                    Some(choices.remove(0).message.content)
                }
            })
            .ok_or_else(|| {
                BlindboxError::MalformedResponse("no choices in chat reply".to_string())
            })
    }
}

#[async_trait]
impl TextGeneration for ChatClient {
    async fn generate_text(&self, messages: &[Message], options: &ChatOptions) -> Result<String> {
        let start = Instant::now();
        let result = self.call(messages, options).await;

        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::REMOTE_CALLS_TOTAL,
            "service" => "text", "status" => status)
        .increment(1);
        metrics::histogram!(telemetry::REMOTE_CALL_DURATION_SECONDS, "service" => "text")
            .record(start.elapsed().as_secs_f64());

        result
    }
}
