//! The conversation transcript store.
//!
//! A transcript is an ordered, append-only log of role-tagged messages
//! scoped to one interactive session. The full sequence is used verbatim as
//! the context for each chat request; there is no windowing, no size cap,
//! and no persistence across sessions.

use crate::types::ChatMessage;

/// An ordered, append-only sequence of chat messages.
///
/// Only the active session's single logical thread of control ever touches
/// a transcript, so no synchronization is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the end of the transcript.
    ///
    /// No deduplication and no size cap; subsequent reads observe the new
    /// message immediately.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Returns the full ordered sequence.
    pub fn all(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Empties the transcript. Idempotent.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Returns the number of messages in the transcript.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the transcript holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.append(ChatMessage::user("first"));
        transcript.append(ChatMessage::assistant("second"));
        transcript.append(ChatMessage::user("third"));

        let all = transcript.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].content, "first");
        assert_eq!(all[1].content, "second");
        assert_eq!(all[2].content, "third");
    }

    #[test]
    fn append_does_not_deduplicate() {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::user("same"));
        transcript.append(ChatMessage::user("same"));
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut transcript = Transcript::new();
        for i in 0..10 {
            transcript.append(ChatMessage::user(format!("message {i}")));
        }
        assert_eq!(transcript.len(), 10);

        transcript.clear();
        assert!(transcript.is_empty());

        transcript.clear();
        assert!(transcript.is_empty());
    }
}
