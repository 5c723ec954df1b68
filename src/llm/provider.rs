//! Completion provider abstraction
//!
//! The HTTP handlers only know about the `ChatProvider` trait. The production
//! implementation talks to Groq; tests substitute a scripted provider.

use async_trait::async_trait;
use thiserror::Error;

use crate::llm::types::Message;

/// Errors from a completion call
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The request never produced a response
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Groq API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not valid JSON for the expected shape
    #[error("failed to parse completion response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response parsed but contained no choices
    #[error("completion response contained no choices")]
    NoChoices,
}

/// A backend that can turn a message list into an assistant reply
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send the full message list and return the assistant's reply text
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError>;

    /// Model identifier used for requests
    fn model(&self) -> &str;

    /// Short provider name for logging
    fn provider_name(&self) -> &str;
}
