use crate::application::advice::service::AdviceService;
use crate::domain::advice::fallback::fallback_response;
use crate::domain::advice::value_object::GeneratedReply;
use fg_core::types::financial_topic::FinancialTopic;
use std::sync::Arc;
use tracing::warn;

/// Produces exactly one bot reply for a user query, whatever the remote
/// service does.
pub struct GenerateReplyUseCase {
    service_advice: Arc<AdviceService>,
}

impl GenerateReplyUseCase {
    pub fn new(service_advice: Arc<AdviceService>) -> Self {
        GenerateReplyUseCase { service_advice }
    }

    pub async fn execute(&self, query: &str, language: &str) -> GeneratedReply {
        match self.service_advice.generate_advice(query, language).await {
            Ok(content) => {
                let topic = self.service_advice.categorize_topic(query).await;
                GeneratedReply {
                    content,
                    topic,
                    fallback: false,
                }
            }
            Err(err) => {
                warn!(
                    "Advice generation failed ({}), replying from the local table: {}",
                    err,
                    err.detail()
                );
                GeneratedReply {
                    content: fallback_response(query, language).to_string(),
                    topic: FinancialTopic::GeneralFinance,
                    fallback: true,
                }
            }
        }
    }
}
