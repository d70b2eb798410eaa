use crate::application::advice::service::AdviceService;
use crate::application::conversation::service::ConversationService;
use crate::application::profile::service::ProfileService;
use crate::clients::gemini::{CompletionClient, GeminiClient};
use crate::config::BackendConfig;
use crate::domain::conversation::repository::ConversationRepository;
use crate::domain::profile::repository::ProfileRepository;
use crate::infrastructure::storage::backend::{StorageBackend, build_storage};
use crate::use_cases::message::generate_reply_use_case::GenerateReplyUseCase;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct AppState {
    pub service_advice: Arc<AdviceService>,
    pub service_profile: Arc<ProfileService>,
    /// One orchestrator for the whole server; holding the lock for a send
    /// keeps a second send from overlapping it.
    pub service_conversation: Arc<Mutex<ConversationService>>,
}

impl AppState {
    pub fn new(config: &BackendConfig) -> Self {
        let client = Arc::new(GeminiClient::new(&config.gemini));
        let storage = build_storage(config.storage, &config.data_dir);
        AppState::from_parts(
            client,
            storage,
            &config.gemini.primary_model,
            &config.gemini.fallback_model,
        )
    }

    pub fn from_parts(
        client: Arc<dyn CompletionClient>,
        storage: Arc<dyn StorageBackend>,
        primary_model: &str,
        fallback_model: &str,
    ) -> Self {
        let repo_profile = Arc::new(ProfileRepository::new(storage.clone()));
        let repo_conversation = Arc::new(ConversationRepository::new(
            storage,
            repo_profile.clone(),
        ));
        let service_advice = Arc::new(AdviceService::new(client, primary_model, fallback_model));
        let service_profile = Arc::new(ProfileService::new(
            repo_profile,
            repo_conversation.clone(),
        ));
        let service_conversation = ConversationService::new(
            repo_conversation,
            service_profile.clone(),
            GenerateReplyUseCase::new(service_advice.clone()),
        );

        AppState {
            service_advice,
            service_profile,
            service_conversation: Arc::new(Mutex::new(service_conversation)),
        }
    }
}
