//! Debate Studio backend
//!
//! An HTTP service that hosts structured debates against an LLM. Each turn
//! sends the topic, the user's opening stance and the transcript to Groq
//! with a fixed opposing-stance system prompt, reducing long transcripts
//! through a sliding context window. The service also serves the prebuilt
//! frontend bundle and a list of suggested topics.

pub mod config;
pub mod context;
pub mod debate;
pub mod error;
pub mod llm;
pub mod logging;
pub mod server;
