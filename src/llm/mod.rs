//! LLM provider layer
//!
//! Message types, the provider trait and the Groq-backed implementation.

pub mod groq;
pub mod provider;
pub mod types;

pub use groq::GroqProvider;
pub use provider::{ChatProvider, CompletionError};
pub use types::{ChatChoice, ChatRequest, ChatResponse, ChatUsage, Message, Role};
