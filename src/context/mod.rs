//! Conversation context management
//!
//! This module provides the ContextWindow which keeps forwarded debate
//! history inside a fixed message budget by digesting older exchanges
//! into a single summary message.

mod window;

pub use window::{ContextWindow, DEFAULT_MAX_MESSAGES};
