//! Chat transcript.
//!
//! Append-only within a conversation.  The transcript is seeded with the
//! advisor's localized greeting and re-seeded from scratch when the display
//! language changes — the conversation does not survive a language switch.

use chrono::Utc;

use wellkit_contracts::chat::{AdvisorReply, ChatMessage, MessageId, Sender};

/// The visible conversation with the advisor.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// Start a conversation with the advisor's greeting as the first message.
    pub fn seeded(greeting: &str) -> Self {
        let mut log = Self { messages: Vec::new() };
        log.push_greeting(greeting);
        log
    }

    /// Drop the conversation and start over with a (possibly re-localized)
    /// greeting.
    pub fn reset(&mut self, greeting: &str) {
        self.messages.clear();
        self.push_greeting(greeting);
    }

    fn push_greeting(&mut self, greeting: &str) {
        self.messages.push(ChatMessage {
            id: MessageId::new(),
            sender: Sender::Advisor,
            text: greeting.to_string(),
            sent_at: Utc::now(),
            items: Vec::new(),
        });
    }

    /// Append a user message.
    pub fn push_user(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            id: MessageId::new(),
            sender: Sender::User,
            text: text.to_string(),
            sent_at: Utc::now(),
            items: Vec::new(),
        });
    }

    /// Append an advisor reply, carrying its food recommendations.
    pub fn push_advisor(&mut self, reply: AdvisorReply) {
        self.messages.push(ChatMessage {
            id: MessageId::new(),
            sender: Sender::Advisor,
            text: reply.text,
            sent_at: Utc::now(),
            items: reply.items,
        });
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while the transcript holds only the greeting — the moment the
    /// quick-question shortcuts are offered.
    pub fn only_greeting(&self) -> bool {
        self.messages.len() == 1
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use wellkit_contracts::chat::{AdvisorReply, RecommendationItem, Sender};

    use super::ChatLog;

    #[test]
    fn seeded_log_starts_with_advisor_greeting() {
        let log = ChatLog::seeded("Hello! How can I help?");
        assert_eq!(log.len(), 1);
        assert!(log.only_greeting());

        let first = &log.messages()[0];
        assert_eq!(first.sender, Sender::Advisor);
        assert_eq!(first.text, "Hello! How can I help?");
    }

    #[test]
    fn messages_keep_arrival_order() {
        let mut log = ChatLog::seeded("hi");
        log.push_user("I have a headache");
        log.push_advisor(AdvisorReply {
            text: "Rest in a quiet, dark room.".to_string(),
            items: vec![RecommendationItem::new("Water", "Hydration", "💧")],
        });

        let senders: Vec<Sender> = log.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Advisor, Sender::User, Sender::Advisor]);
        assert_eq!(log.messages()[2].items.len(), 1);
        assert!(!log.only_greeting());
    }

    #[test]
    fn reset_reseeds_with_new_greeting() {
        let mut log = ChatLog::seeded("Hello!");
        log.push_user("question");
        log.reset("¡Hola!");

        assert!(log.only_greeting());
        assert_eq!(log.messages()[0].text, "¡Hola!");
    }

    #[test]
    fn message_ids_are_unique() {
        let mut log = ChatLog::seeded("hi");
        for i in 0..20 {
            log.push_user(&format!("message {i}"));
        }

        let unique: std::collections::HashSet<String> = log
            .messages()
            .iter()
            .map(|m| m.id.0.to_string())
            .collect();
        assert_eq!(unique.len(), log.len());
    }
}
