//! Debate turn assembly
//!
//! Request/response types for the `/debate` endpoint and the logic that
//! turns a request into the message list sent upstream.

pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::context::ContextWindow;
use crate::llm::Message;

/// Body of a `POST /debate` request
#[derive(Debug, Clone, Deserialize)]
pub struct DebateRequest {
    /// Debate topic chosen at the start of the session
    pub topic: String,
    /// The stance the user opened with
    pub initial_viewpoint: String,
    /// Full transcript so far, oldest first; absent means a fresh debate
    #[serde(default)]
    pub history: Vec<Message>,
}

/// Body of a successful `/debate` response
#[derive(Debug, Serialize)]
pub struct DebateResponse {
    pub response: String,
}

/// Build the outgoing message list for one debate turn.
///
/// Every request leads with the fixed system prompt. A fresh debate gets a
/// user briefing built from the topic and opening stance; an ongoing one
/// gets a topic reminder followed by the (window-reduced) transcript.
pub fn build_messages(request: &DebateRequest, window: &ContextWindow) -> Vec<Message> {
    let mut messages = vec![Message::system(prompts::SYSTEM_PROMPT)];

    if request.history.is_empty() {
        messages.push(Message::user(prompts::initial_context(
            &request.topic,
            &request.initial_viewpoint,
        )));
    } else {
        messages.push(Message::system(prompts::topic_context(
            &request.topic,
            &request.initial_viewpoint,
        )));
        messages.extend(window.condense(&request.history, &request.topic));
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    fn request(history: Vec<Message>) -> DebateRequest {
        DebateRequest {
            topic: "Free Will vs. Determinism".to_string(),
            initial_viewpoint: "Choices are real".to_string(),
            history,
        }
    }

    #[test]
    fn test_fresh_debate_is_prompt_plus_briefing() {
        let messages = build_messages(&request(Vec::new()), &ContextWindow::default());

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, prompts::SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("Debate Topic: Free Will vs. Determinism"));
        assert!(messages[1].content.contains("User's Initial Position: Choices are real"));
    }

    #[test]
    fn test_ongoing_debate_gets_topic_reminder_then_history() {
        let history = vec![
            Message::user("Determinism is false"),
            Message::assistant("Consider physics"),
        ];
        let messages = build_messages(&request(history.clone()), &ContextWindow::default());

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].content, prompts::SYSTEM_PROMPT);
        assert_eq!(
            messages[1].content,
            "[Debate Topic: Free Will vs. Determinism | User's Initial Stance: Choices are real]"
        );
        assert_eq!(&messages[2..], &history[..]);
    }

    #[test]
    fn test_history_defaults_to_empty_on_the_wire() {
        let parsed: DebateRequest =
            serde_json::from_str(r#"{"topic": "T", "initial_viewpoint": "V"}"#).unwrap();
        assert!(parsed.history.is_empty());
    }

    #[test]
    fn test_long_history_is_reduced_before_sending() {
        let history: Vec<Message> = (0..25)
            .map(|i| {
                if i % 2 == 0 {
                    Message::user(format!("point {}", i))
                } else {
                    Message::assistant(format!("counter {}", i))
                }
            })
            .collect();
        let messages = build_messages(&request(history), &ContextWindow::default());

        // prompt + reminder + summary + 18 recent
        assert_eq!(messages.len(), 21);
        assert!(messages[2].content.starts_with("[Previous context - Topic:"));
    }
}
