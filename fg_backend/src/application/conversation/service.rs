use crate::application::profile::service::ProfileService;
use crate::domain::conversation::repository::ConversationRepository;
use crate::error::{ErrorBackend, Result};
use crate::infrastructure::storage::error::StoreError;
use crate::use_cases::message::generate_reply_use_case::GenerateReplyUseCase;
use fg_core::server::payload::send_message_response::SendMessageResponse;
use fg_core::types::conversation::Conversation;
use fg_core::types::message::{Message, MessageBuilder, MessageSender};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SendState {
    #[default]
    Idle,
    /// The user message is stored and the advice request is in flight.
    Sending,
}

/// Owns the conversation list and the active conversation. Every mutation is
/// written through to the repository; persistence failures are logged and
/// never block a reply.
///
/// Sends are not queued: callers must not start a second `send_message`
/// before the first returns.
pub struct ConversationService {
    repo_conversation: Arc<ConversationRepository>,
    service_profile: Arc<ProfileService>,
    use_case_reply: GenerateReplyUseCase,
    conversations: Vec<Conversation>,
    current: Option<Conversation>,
    state: SendState,
}

impl ConversationService {
    pub fn new(
        repo_conversation: Arc<ConversationRepository>,
        service_profile: Arc<ProfileService>,
        use_case_reply: GenerateReplyUseCase,
    ) -> Self {
        let conversations = repo_conversation.list();
        debug!("Loaded {} conversation(s)", conversations.len());
        ConversationService {
            repo_conversation,
            service_profile,
            use_case_reply,
            conversations,
            current: None,
            state: SendState::Idle,
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn current_conversation(&self) -> Option<&Conversation> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SendState {
        self.state
    }

    /// Activates a new empty conversation. Nothing is stored until its first message.
    pub fn start_new_conversation(&mut self) -> &Conversation {
        let conversation = Conversation::new();
        info!("Started conversation {}", conversation.id);
        self.current.insert(conversation)
    }

    /// Unknown ids leave the active conversation unchanged.
    pub fn select_conversation(&mut self, id: &str) -> Option<&Conversation> {
        match self.conversations.iter().find(|c| c.id == id) {
            Some(conversation) => self.current = Some(conversation.clone()),
            None => debug!("Ignoring selection of unknown conversation {id}"),
        }
        self.current.as_ref()
    }

    /// Returns whether anything was removed, from the list or as the active conversation.
    pub fn delete_conversation(&mut self, id: &str) -> Result<bool> {
        let stored = self.repo_conversation.delete(id)?;
        let before = self.conversations.len();
        self.conversations.retain(|c| c.id != id);
        let mut removed = stored || self.conversations.len() != before;

        if self.current.as_ref().is_some_and(|c| c.id == id) {
            self.current = None;
            removed = true;
        }
        Ok(removed)
    }

    /// Deletes every stored record and forgets the in-memory state.
    pub fn clear_all(&mut self) -> Result<()> {
        self.service_profile.clear_all()?;
        self.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.conversations.clear();
        self.current = None;
        self.state = SendState::Idle;
    }

    pub async fn send_message(&mut self, content: &str, language: &str) -> Result<SendMessageResponse> {
        if content.trim().is_empty() {
            return Err(ErrorBackend::InvalidInput(
                "Message content cannot be empty".to_string(),
            ));
        }

        self.state = SendState::Sending;
        let result = self.settle(content, language).await;
        self.state = SendState::Idle;
        result
    }

    async fn settle(&mut self, content: &str, language: &str) -> Result<SendMessageResponse> {
        let conversation = match self.current.take() {
            Some(conversation) => conversation,
            None => {
                let conversation = Conversation::new();
                info!("No active conversation, started {}", conversation.id);
                conversation
            }
        };

        let user_message = self.new_message(content, MessageSender::User, language)?;
        let conversation = self.append_message(conversation, user_message.clone());
        self.current = Some(conversation.clone());

        let reply = self.use_case_reply.execute(content, language).await;

        let bot_message = self.new_message(&reply.content, MessageSender::Bot, language)?;
        let mut conversation = self.append_message(conversation, bot_message.clone());

        conversation.add_topic(reply.topic);
        let stored = self.repo_conversation.add_topic(&conversation.id, reply.topic);
        let conversation = self.write_through(conversation, stored);

        if let Err(err) = self.service_profile.add_financial_topic(reply.topic) {
            warn!("Failed to record topic on profile: {err}");
        }

        self.refresh();
        self.current = Some(conversation.clone());

        Ok(SendMessageResponse {
            conversation,
            user_message,
            bot_message,
            topic: reply.topic,
            fallback: reply.fallback,
        })
    }

    fn new_message(&self, content: &str, sender: MessageSender, language: &str) -> Result<Message> {
        Ok(MessageBuilder::default()
            .content(content)
            .sender(sender)
            .language(Some(language.to_string()))
            .build()?)
    }

    fn append_message(&self, mut conversation: Conversation, message: Message) -> Conversation {
        conversation.add_message(message.clone());
        let stored = self.repo_conversation.add_message(&conversation.id, message);
        self.write_through(conversation, stored)
    }

    /// Prefers the stored copy; a conversation the store does not know yet is saved whole.
    fn write_through(
        &self,
        conversation: Conversation,
        stored: std::result::Result<Option<Conversation>, StoreError>,
    ) -> Conversation {
        match stored {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                if let Err(err) = self.repo_conversation.save(&conversation) {
                    error!("Failed to save conversation {}: {err}", conversation.id);
                }
                conversation
            }
            Err(err) => {
                error!("Failed to update conversation {}: {err}", conversation.id);
                conversation
            }
        }
    }

    fn refresh(&mut self) {
        self.conversations = self.repo_conversation.list();
    }
}
