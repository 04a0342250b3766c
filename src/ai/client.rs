//! HTTP client for the chat-completion service.
//!
//! This module provides a small blocking client for an OpenAI-style
//! chat-completions endpoint. The credential is injected at construction
//! time; the client never reads the process environment.

use crate::errors::ReflectionError;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (system, user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
}

/// Response from chat completion. Only the fields this program consumes.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the chat-completion service.
pub struct ChatClient {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl ChatClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the service (e.g., "https://api.openai.com/v1")
    /// * `api_key` - Bearer credential; `None` makes every request fail with
    ///   [`ReflectionError::MissingCredential`]
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http: Client::new(),
        }
    }

    /// Sends a chat completion request and returns the content of the first
    /// returned choice.
    ///
    /// # Arguments
    ///
    /// * `model` - Model identifier (e.g., "gpt-4o-mini")
    /// * `messages` - Conversation messages
    /// * `max_tokens` - Cap on generated output tokens
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No credential was configured
    /// - The request cannot be sent (network failure, DNS, refused connection)
    /// - The service answers with a non-success status
    /// - The response body is not a parseable completion or has no choices
    pub fn complete(
        &self,
        model: &str,
        messages: &[Message],
        max_tokens: u32,
    ) -> Result<String, ReflectionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ReflectionError::MissingCredential)?;

        let url = format!("{}/chat/completions", self.base_url);
        let request = CompletionRequest {
            model,
            messages,
            max_tokens,
        };

        debug!("Requesting completion with model: {}", model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .map_err(ReflectionError::Request)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(ReflectionError::Api { status, body });
        }

        let completion: CompletionResponse = response.json().map_err(|e| {
            ReflectionError::MalformedResponse(format!("failed to parse completion: {}", e))
        })?;

        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            ReflectionError::MalformedResponse("response contained no choices".to_string())
        })?;

        debug!("Received completion");
        Ok(choice.message.content)
    }
}
