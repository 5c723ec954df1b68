//! Sliding-window reduction of debate history
//!
//! Incoming requests carry the full client-side transcript. Transcripts
//! longer than the window are reduced before forwarding: the most recent
//! turns survive verbatim and older exchanges are folded into a single
//! system message carrying a short digest.

use crate::llm::Message;

/// Default maximum number of history messages forwarded per request
pub const DEFAULT_MAX_MESSAGES: usize = 20;

/// Slots reserved out of the window for the summary message and headroom
const RESERVED_SLOTS: usize = 2;

/// Digested exchanges kept in the summary (oldest beyond this are dropped)
const DIGEST_EXCHANGES: usize = 5;

/// Characters of each side of an exchange quoted in the digest
const DIGEST_SNIPPET_CHARS: usize = 100;

/// History reducer with a fixed message budget
#[derive(Debug, Clone, Copy)]
pub struct ContextWindow {
    max_messages: usize,
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGES)
    }
}

impl ContextWindow {
    /// Create a window that triggers reduction above `max_messages`
    pub fn new(max_messages: usize) -> Self {
        Self { max_messages }
    }

    /// The reduction threshold
    pub fn max_messages(&self) -> usize {
        self.max_messages
    }

    /// Reduce `history` to fit the window.
    ///
    /// Histories at or under the threshold come back unchanged. Longer ones
    /// are split: the last `max_messages - 2` turns are kept verbatim and
    /// everything older is digested into one leading system message tagged
    /// with the debate topic.
    pub fn condense(&self, history: &[Message], topic: &str) -> Vec<Message> {
        if history.len() <= self.max_messages {
            return history.to_vec();
        }

        let keep = self.max_messages.saturating_sub(RESERVED_SLOTS);
        let (older, recent) = history.split_at(history.len() - keep);

        tracing::debug!(
            "Condensing history: {} messages -> 1 summary + {} recent",
            history.len(),
            recent.len()
        );

        let summary = Message::system(self.digest(older, topic));

        let mut reduced = Vec::with_capacity(recent.len() + 1);
        reduced.push(summary);
        reduced.extend_from_slice(recent);
        reduced
    }

    /// Fold dropped messages into the summary text.
    ///
    /// Messages are paired positionally (turn, reply); a trailing unpaired
    /// message is left out of the digest.
    fn digest(&self, older: &[Message], topic: &str) -> String {
        let exchanges: Vec<String> = older
            .chunks_exact(2)
            .map(|pair| {
                format!(
                    "User: {}... | You: {}...",
                    snippet(&pair[0].content),
                    snippet(&pair[1].content)
                )
            })
            .collect();

        let start = exchanges.len().saturating_sub(DIGEST_EXCHANGES);
        let summary_text = exchanges[start..].join("\n");

        format!(
            "[Previous context - Topic: {}]\n{}\n[End summary]",
            topic, summary_text
        )
    }
}

/// First `DIGEST_SNIPPET_CHARS` characters of `text`, cut on a char boundary
fn snippet(text: &str) -> &str {
    match text.char_indices().nth(DIGEST_SNIPPET_CHARS) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
