// src/services/completion.rs
use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::AppConfig, error::RelayError};

pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 300;
pub const TOP_P: f64 = 1.0;

/// Sends a system prompt plus one user message to a hosted model and returns
/// the generated text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, RelayError>;
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub stop: Option<Vec<&'a str>>,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct WireMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(model: &'a str, system_prompt: &'a str, user_message: &'a str) -> Self {
        Self {
            model,
            messages: vec![
                WireMessage { role: "system", content: system_prompt },
                WireMessage { role: "user", content: user_message },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            stop: None,
            stream: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice.
    pub fn into_reply(self) -> Result<String, RelayError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RelayError::malformed("completion response contained no choices"))?;
        choice
            .message
            .content
            .ok_or_else(|| RelayError::malformed("completion choice had no message content"))
    }
}

#[derive(Deserialize)]
struct UpstreamErrorBody {
    error: UpstreamErrorDetail,
}

#[derive(Deserialize)]
struct UpstreamErrorDetail {
    message: String,
}

/// Chat-completion client for Groq's OpenAI-compatible API.
pub struct GroqClient {
    client: Client,
    model: &'static str,
    url: String,
}

impl GroqClient {
    pub fn new(config: &AppConfig) -> Result<Self, RelayError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| RelayError::init("API key contains characters not allowed in a header"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RelayError::init(e.to_string()))?;

        Ok(Self {
            client,
            model: config.model_id,
            url: format!("{}/chat/completions", config.base_url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, RelayError> {
        let request = CompletionRequest::new(self.model, system_prompt, user_message);

        let response = self.client.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.text().await {
                Ok(body) => serde_json::from_str::<UpstreamErrorBody>(&body)
                    .map(|b| b.error.message)
                    .unwrap_or(body),
                Err(e) => e.to_string(),
            };
            return Err(RelayError::upstream(format!(
                "Error code: {} - {}",
                status.as_u16(),
                detail
            )));
        }

        let body: CompletionResponse = response.json().await?;
        let reply = body.into_reply()?;
        debug!(model = self.model, reply_len = reply.len(), "completion received");
        Ok(reply)
    }
}
