//! Groq chat completions client
//!
//! Groq exposes an OpenAI-compatible API, so the request and response
//! shapes live in `types.rs`. This module handles transport and the fixed
//! sampling parameters used for debate turns.

use async_trait::async_trait;
use reqwest::Client;

use crate::llm::provider::{ChatProvider, CompletionError};
use crate::llm::types::{ChatRequest, ChatResponse, Message};

/// Default Groq API base URL
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Default model for debate turns
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TOP_P: f32 = 1.0;

/// Groq-backed completion provider
pub struct GroqProvider {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

impl GroqProvider {
    /// Create a provider with the default model and sampling parameters
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }

    /// Use a specific model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a custom API base URL (e.g. a proxy)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the completion token cap
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn build_request(&self, messages: &[Message]) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            top_p: Some(self.top_p),
            stream: Some(false),
            stop: None,
        }
    }

    async fn send_chat_request(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatResponse, CompletionError> {
        let url = format!("{}/chat/completions", self.api_base);

        let request_json = serde_json::to_string(request)?;
        tracing::debug!("[Groq] Request JSON: {}", request_json);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .body(request_json)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("[Groq] Response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("[Groq] API error: {} - {}", status, body);
            return Err(CompletionError::Api { status, body });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

#[async_trait]
impl ChatProvider for GroqProvider {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        tracing::info!(
            "[Groq] Sending completion request: model={}, messages={}",
            self.model,
            messages.len()
        );

        let request = self.build_request(messages);
        let response = self.send_chat_request(&request).await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                "[Groq] Token usage: {} prompt + {} completion = {} total",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::NoChoices)?;

        if let Some(reason) = &choice.finish_reason {
            tracing::debug!("[Groq] Finish reason: {}", reason);
        }

        Ok(choice.message.content)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "groq"
    }
}
