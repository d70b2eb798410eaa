use crate::domain::conversation::repository::ConversationRepository;
use crate::domain::profile::repository::ProfileRepository;
use crate::error::{ErrorBackend, Result};
use chrono::Utc;
use fg_core::server::payload::export_data::ExportData;
use fg_core::server::payload::profile_stats::ProfileStats;
use fg_core::types::financial_topic::FinancialTopic;
use fg_core::types::language::is_supported;
use fg_core::types::message::MessageSender;
use fg_core::types::user_profile::UserProfile;
use std::sync::Arc;
use tracing::info;

#[derive(Clone, Debug)]
pub struct ProfileService {
    repo_profile: Arc<ProfileRepository>,
    repo_conversation: Arc<ConversationRepository>,
}

impl ProfileService {
    pub fn new(
        repo_profile: Arc<ProfileRepository>,
        repo_conversation: Arc<ConversationRepository>,
    ) -> Self {
        ProfileService {
            repo_profile,
            repo_conversation,
        }
    }

    pub fn load_or_create(&self) -> Result<UserProfile> {
        Ok(self.repo_profile.load_or_create()?)
    }

    /// A blank name clears it.
    pub fn update_name(&self, name: Option<String>) -> Result<UserProfile> {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Ok(self.repo_profile.update(|profile| profile.name = name)?)
    }

    pub fn update_language(&self, code: &str) -> Result<UserProfile> {
        if !is_supported(code) {
            return Err(ErrorBackend::UnsupportedLanguage(code.to_string()));
        }
        let profile = self
            .repo_profile
            .update(|profile| profile.preferred_language = code.to_string())?;
        info!("Preferred language set to {code}");
        Ok(profile)
    }

    pub fn complete_onboarding(&self) -> Result<UserProfile> {
        Ok(self
            .repo_profile
            .update(|profile| profile.onboarding_completed = true)?)
    }

    /// Returns whether the topic was new to the profile.
    pub fn add_financial_topic(&self, topic: FinancialTopic) -> Result<bool> {
        let mut added = false;
        self.repo_profile
            .update(|profile| added = profile.add_financial_topic(topic))?;
        Ok(added)
    }

    pub fn stats(&self) -> ProfileStats {
        let conversations = self.repo_conversation.list();
        let mut unique_topics: Vec<FinancialTopic> = Vec::new();
        for topic in conversations.iter().flat_map(|c| c.topics.iter()) {
            if !unique_topics.contains(topic) {
                unique_topics.push(*topic);
            }
        }
        ProfileStats {
            total_conversations: conversations.len(),
            total_messages: conversations.iter().map(|c| c.messages.len()).sum(),
            user_messages: conversations
                .iter()
                .map(|c| c.count_by_sender(MessageSender::User))
                .sum(),
            unique_topics,
        }
    }

    pub fn export(&self) -> Result<ExportData> {
        Ok(ExportData {
            profile: self.repo_profile.find_or_default(),
            conversations: self.repo_conversation.list(),
            export_date: Utc::now(),
        })
    }

    /// Deletes both records. Irreversible.
    pub fn clear_all(&self) -> Result<()> {
        self.repo_conversation.clear()?;
        self.repo_profile.remove()?;
        info!("All stored data cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::backend::{MemoryStorage, StorageBackend};
    use fg_core::types::conversation::Conversation;
    use fg_core::types::message::MessageBuilder;

    fn service() -> (Arc<ConversationRepository>, ProfileService) {
        let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
        let profiles = Arc::new(ProfileRepository::new(storage.clone()));
        let conversations = Arc::new(ConversationRepository::new(storage, profiles.clone()));
        (conversations.clone(), ProfileService::new(profiles, conversations))
    }

    #[test]
    fn test_update_language_validates_catalog() {
        let (_, service) = service();
        assert_eq!(service.update_language("ml").unwrap().preferred_language, "ml");
        assert!(matches!(
            service.update_language("fr"),
            Err(ErrorBackend::UnsupportedLanguage(code)) if code == "fr"
        ));
        assert_eq!(service.load_or_create().unwrap().preferred_language, "ml");
    }

    #[test]
    fn test_name_and_onboarding() {
        let (_, service) = service();
        assert_eq!(
            service.update_name(Some("  Ravi ".into())).unwrap().name.as_deref(),
            Some("Ravi")
        );
        assert_eq!(service.update_name(Some("   ".into())).unwrap().name, None);
        assert!(service.complete_onboarding().unwrap().onboarding_completed);
    }

    #[test]
    fn test_financial_topics_deduplicated() {
        let (_, service) = service();
        assert!(service.add_financial_topic(FinancialTopic::Insurance).unwrap());
        assert!(!service.add_financial_topic(FinancialTopic::Insurance).unwrap());
        assert_eq!(
            service.load_or_create().unwrap().financial_topics,
            vec![FinancialTopic::Insurance]
        );
    }

    #[test]
    fn test_stats_and_export() {
        let (conversations, service) = service();
        let mut conversation = Conversation::new();
        for (content, sender) in [("hi", MessageSender::User), ("hello", MessageSender::Bot)] {
            conversation.add_message(
                MessageBuilder::default()
                    .content(content)
                    .sender(sender)
                    .build()
                    .unwrap(),
            );
        }
        conversation.add_topic(FinancialTopic::Savings);
        conversations.save(&conversation).unwrap();

        let stats = service.stats();
        assert_eq!(stats.total_conversations, 1);
        assert_eq!(stats.total_messages, 2);
        assert_eq!(stats.user_messages, 1);
        assert_eq!(stats.unique_topics, vec![FinancialTopic::Savings]);

        let export = service.export().unwrap();
        assert_eq!(export.conversations, vec![conversation]);
        assert_eq!(export.profile.conversations.len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let (conversations, service) = service();
        conversations.save(&Conversation::new()).unwrap();
        service.clear_all().unwrap();
        assert!(conversations.find_all().unwrap().is_empty());
        assert!(service.stats().total_conversations == 0);
    }

    #[test]
    fn test_name_survives_concurrent_conversation_writes() {
        let (conversations, service) = service();
        let writer = {
            let conversations = conversations.clone();
            std::thread::spawn(move || {
                for _ in 0..300 {
                    conversations.save(&Conversation::new()).unwrap();
                }
            })
        };

        for i in 0..300 {
            let name = format!("n{i}");
            service.update_name(Some(name.clone())).unwrap();
            assert_eq!(service.load_or_create().unwrap().name, Some(name));
        }
        writer.join().unwrap();

        let profile = service.load_or_create().unwrap();
        assert_eq!(profile.name.as_deref(), Some("n299"));
        assert_eq!(profile.conversations, conversations.find_all().unwrap());
    }
}
