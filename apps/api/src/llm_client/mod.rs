/// LLM Client: the single point of entry for all completion API calls in Postcraft.
///
/// No other module talks to the OpenAI API directly. Callers depend on the
/// `CompletionClient` trait so the remote service can be swapped out in tests.
///
/// Model: gpt-3.5-turbo (hardcoded, not configurable)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// The model used for all completion calls in Postcraft.
pub const MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A remote text-completion capability: one prompt in, generated text out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str, api_key: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// OpenAI Chat Completions client. The API key is supplied per call, never stored.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
}

impl LlmClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Makes a single call to the completions endpoint, returning the full response object.
    /// Failures are returned as-is; there is no retry.
    pub async fn call(&self, prompt: &str, api_key: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}", status);
            return Err(classify_error(status, body));
        }

        let body = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                MODEL, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl CompletionClient for LlmClient {
    async fn complete(&self, prompt: &str, api_key: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, api_key).await?;
        match response.text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyContent),
        }
    }
}

/// Maps a non-2xx response onto the error taxonomy, preferring the API's own message.
fn classify_error(status: StatusCode, body: String) -> LlmError {
    let message = serde_json::from_str::<OpenAiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(message),
        _ => LlmError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
