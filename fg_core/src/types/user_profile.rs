use crate::types::conversation::Conversation;
use crate::types::financial_topic::FinancialTopic;
use crate::types::language::DEFAULT_LANGUAGE_CODE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub preferred_language: String,
    /// Mirror of the persisted conversation collection.
    #[serde(default)]
    pub conversations: Vec<Conversation>,
    #[serde(default)]
    pub financial_topics: Vec<FinancialTopic>,
    #[serde(default)]
    pub onboarding_completed: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            id: format!("user_{}", uuid::Uuid::new_v4().simple()),
            name: None,
            preferred_language: DEFAULT_LANGUAGE_CODE.to_string(),
            conversations: Vec::new(),
            financial_topics: Vec::new(),
            onboarding_completed: false,
        }
    }
}

impl UserProfile {
    /// Returns `false` when the topic was already known.
    pub fn add_financial_topic(&mut self, topic: FinancialTopic) -> bool {
        if self.financial_topics.contains(&topic) {
            return false;
        }
        self.financial_topics.push(topic);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = UserProfile::default();
        assert!(profile.id.starts_with("user_"));
        assert_eq!(profile.preferred_language, "en");
        assert!(!profile.onboarding_completed);
        assert!(profile.name.is_none());
    }

    #[test]
    fn test_financial_topics_are_deduplicated() {
        let mut profile = UserProfile::default();
        assert!(profile.add_financial_topic(FinancialTopic::Insurance));
        assert!(!profile.add_financial_topic(FinancialTopic::Insurance));
        assert_eq!(profile.financial_topics, vec![FinancialTopic::Insurance]);
    }

    #[test]
    fn test_reads_minimal_document() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id":"user_1","preferredLanguage":"hi"}"#,
        )
        .unwrap();
        assert_eq!(profile.preferred_language, "hi");
        assert!(profile.conversations.is_empty());
        assert!(profile.financial_topics.is_empty());
    }
}
