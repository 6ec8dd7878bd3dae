//! Local model of a polled conversation.
//!
//! The overlay re-fetches the full conversation on a timer and appends
//! whatever extends the list, detected by array length alone. Message ids
//! are deliberately not diffed: that matches the observed behavior of the
//! feed, and means a backend that reorders or drops messages would go
//! unnoticed between polls.

use contracts::domain::a005_message::Message;

#[derive(Debug, Clone, Default)]
pub struct ChatFeed {
    messages: Vec<Message>,
}

impl ChatFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Apply one poll result. When the fetched list is longer than the
    /// local one, the new suffix is appended and returned; an equal or
    /// shorter list changes nothing.
    pub fn apply_fetch(&mut self, fetched: Vec<Message>) -> Vec<Message> {
        if fetched.len() <= self.messages.len() {
            return Vec::new();
        }
        let appended: Vec<Message> = fetched[self.messages.len()..].to_vec();
        self.messages = fetched;
        appended
    }

    /// Append a message the server just acknowledged. The overlay never
    /// appends optimistically before the acknowledgement.
    pub fn push_sent(&mut self, message: Message) {
        self.messages.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: &str, text: &str) -> Message {
        Message {
            id: id.to_string(),
            sender_id: "u1".to_string(),
            receiver_id: "u2".to_string(),
            message: text.to_string(),
            sent_at: "2026-04-01T10:00:00Z".to_string(),
            is_read: false,
        }
    }

    #[test]
    fn test_longer_fetch_appends_suffix() {
        let mut feed = ChatFeed::new();
        let first = vec![msg("1", "hi"), msg("2", "is this available?"), msg("3", "yes")];
        let appended = feed.apply_fetch(first.clone());
        assert_eq!(appended.len(), 3);

        let mut second = first;
        second.push(msg("4", "great, buying now"));
        let appended = feed.apply_fetch(second);
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].message, "great, buying now");
        assert_eq!(feed.len(), 4);
    }

    #[test]
    fn test_equal_or_shorter_fetch_is_ignored() {
        let mut feed = ChatFeed::new();
        feed.apply_fetch(vec![msg("1", "a"), msg("2", "b")]);

        // Same length but different content: not detected, by design.
        let replaced = vec![msg("1", "a"), msg("9", "z")];
        assert!(feed.apply_fetch(replaced).is_empty());
        assert_eq!(feed.messages()[1].message, "b");

        assert!(feed.apply_fetch(vec![msg("1", "a")]).is_empty());
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_sent_message_appended_after_ack() {
        let mut feed = ChatFeed::new();
        feed.push_sent(msg("1", "hello"));
        assert_eq!(feed.len(), 1);
    }
}
