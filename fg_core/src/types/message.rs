use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    #[default]
    User,
    Bot,
}

impl Display for MessageSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageSender::User => write!(f, "user"),
            MessageSender::Bot => write!(f, "bot"),
        }
    }
}

/// A single chat line. Never mutated once appended to a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(build_fn(error = "crate::error::ErrorCore"))]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[builder(default = "Message::new_id()", setter(into))]
    pub id: String,
    #[builder(setter(into))]
    pub content: String,
    pub sender: MessageSender,
    #[builder(default = "Utc::now()")]
    pub timestamp: DateTime<Utc>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Message {
    pub fn new_id() -> String {
        format!("msg_{}", uuid::Uuid::new_v4().simple())
    }

    pub fn is_user(&self) -> bool {
        self.sender == MessageSender::User
    }

    pub fn is_bot(&self) -> bool {
        self.sender == MessageSender::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCore;

    #[test]
    fn test_builder_fills_id_and_timestamp() {
        let before = Utc::now();
        let message = MessageBuilder::default()
            .content("How do I start a SIP?")
            .sender(MessageSender::User)
            .language(Some("en".to_string()))
            .build()
            .unwrap();

        assert!(message.id.starts_with("msg_"));
        assert!(message.timestamp >= before);
        assert!(message.is_user());
        assert_eq!(message.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_builder_requires_content() {
        let result = MessageBuilder::default().sender(MessageSender::Bot).build();
        assert!(matches!(result, Err(ErrorCore::UninitializeElement(_))));
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let message = MessageBuilder::default()
            .content("hi")
            .sender(MessageSender::Bot)
            .build()
            .unwrap();
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["sender"], "bot");
        assert!(json.get("language").is_none());
        assert!(json.get("timestamp").is_some());
    }
}
