//! OpenAI-compatible Chat Completions Client
//!
//! Thin typed wrapper over the hosted chat-completions endpoint. The base
//! URL comes from the configuration, so tests and alternate hosts can point
//! the client anywhere that speaks the same wire format.

use codeaudit_core::AuditorConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{LlmError, LlmResult};

/// Request body for the chat-completions endpoint
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Response body from the chat-completions endpoint
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completions API.
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    client: Client,
}

impl OpenAiClient {
    /// Create a client from the auditor configuration.
    #[must_use]
    pub fn new(config: &AuditorConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client: Client::new(),
        }
    }

    /// Send a (system, user) instruction pair and return the reply text.
    ///
    /// The request carries a JSON-object response-format directive; the reply
    /// text is returned untouched for the normalizer to repair.
    pub async fn complete(&self, system: &str, user: &str) -> LlmResult<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Api { status, body });
        }

        let reply: ChatResponse = response.json().await?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::NoContent)
    }
}
