use crate::types::financial_topic::FinancialTopic;
use crate::types::message::{Message, MessageSender};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Title a conversation carries until its first user message names it.
pub const NEW_CONVERSATION_TITLE: &str = "New Conversation";
pub const TITLE_MAX_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub topics: Vec<FinancialTopic>,
}

impl Default for Conversation {
    fn default() -> Self {
        Conversation::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        let now = Utc::now();
        Conversation {
            id: format!("conv_{}", uuid::Uuid::new_v4().simple()),
            title: NEW_CONVERSATION_TITLE.to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
            topics: Vec::new(),
        }
    }

    /// Appends a message and bumps `updated_at`.
    ///
    /// The first user message replaces the placeholder title.
    pub fn add_message(&mut self, message: Message) {
        if self.title == NEW_CONVERSATION_TITLE && message.sender == MessageSender::User {
            self.title = generate_title(&message.content);
        }
        self.messages.push(message);
        self.touch();
    }

    /// Returns `false` when the topic was already recorded.
    pub fn add_topic(&mut self, topic: FinancialTopic) -> bool {
        if self.topics.contains(&topic) {
            return false;
        }
        self.topics.push(topic);
        self.touch();
        true
    }

    pub fn count_by_sender(&self, sender: MessageSender) -> usize {
        self.messages.iter().filter(|m| m.sender == sender).count()
    }

    fn touch(&mut self) {
        // keep updated_at monotonic even if the wall clock steps back
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

pub fn generate_title(first_message: &str) -> String {
    if first_message.chars().count() > TITLE_MAX_CHARS {
        let head: String = first_message.chars().take(TITLE_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        first_message.to_string()
    }
}

impl Display for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} messages, {})",
            self.title,
            self.messages.len(),
            self.updated_at.format("%Y-%m-%d %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::message::MessageBuilder;

    fn message(content: &str, sender: MessageSender) -> Message {
        MessageBuilder::default()
            .content(content)
            .sender(sender)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_conversation_is_placeholder() {
        let conversation = Conversation::new();
        assert_eq!(conversation.title, NEW_CONVERSATION_TITLE);
        assert!(conversation.messages.is_empty());
        assert!(conversation.topics.is_empty());
        assert!(conversation.id.starts_with("conv_"));
    }

    #[test]
    fn test_long_first_message_truncates_title() {
        let mut conversation = Conversation::new();
        let content = "How should I split my monthly salary between savings and EMIs?";
        conversation.add_message(message(content, MessageSender::User));

        let expected: String = content.chars().take(30).collect::<String>() + "...";
        assert_eq!(conversation.title, expected);

        conversation.add_message(message("Another question entirely", MessageSender::User));
        assert_eq!(conversation.title, expected);
    }

    #[test]
    fn test_short_first_message_is_title() {
        let mut conversation = Conversation::new();
        conversation.add_message(message("What is a PPF?", MessageSender::User));
        assert_eq!(conversation.title, "What is a PPF?");
    }

    #[test]
    fn test_bot_message_does_not_set_title() {
        let mut conversation = Conversation::new();
        conversation.add_message(message("Welcome back!", MessageSender::Bot));
        assert_eq!(conversation.title, NEW_CONVERSATION_TITLE);
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        let hindi = "मुझे अपनी बचत कैसे बढ़ानी चाहिए ताकि भविष्य सुरक्षित रहे";
        let title = generate_title(hindi);
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 3);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn test_topics_are_deduplicated() {
        let mut conversation = Conversation::new();
        assert!(conversation.add_topic(FinancialTopic::Savings));
        assert!(!conversation.add_topic(FinancialTopic::Savings));
        assert!(conversation.add_topic(FinancialTopic::Investment));
        assert!(!conversation.add_topic(FinancialTopic::Savings));
        assert_eq!(
            conversation.topics,
            vec![FinancialTopic::Savings, FinancialTopic::Investment]
        );
    }

    #[test]
    fn test_add_message_bumps_updated_at() {
        let mut conversation = Conversation::new();
        let created = conversation.updated_at;
        conversation.add_message(message("hi", MessageSender::User));
        assert!(conversation.updated_at >= created);
        assert_eq!(conversation.count_by_sender(MessageSender::User), 1);
        assert_eq!(conversation.count_by_sender(MessageSender::Bot), 0);
    }
}
