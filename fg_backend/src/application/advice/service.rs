use crate::clients::gemini::CompletionClient;
use crate::domain::advice::prompt::{CONNECTIVITY_PROMPT, build_financial_prompt, build_topic_prompt};
use crate::domain::advice::value_object::AdviceError;
use fg_core::types::financial_topic::FinancialTopic;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Wraps the remote completion service with prompt construction, the
/// primary/fallback model pair and error normalisation.
#[derive(Clone)]
pub struct AdviceService {
    client: Arc<dyn CompletionClient>,
    primary_model: String,
    fallback_model: String,
}

impl std::fmt::Debug for AdviceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdviceService")
            .field("primary_model", &self.primary_model)
            .field("fallback_model", &self.fallback_model)
            .finish()
    }
}

impl AdviceService {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        primary_model: impl Into<String>,
        fallback_model: impl Into<String>,
    ) -> Self {
        AdviceService {
            client,
            primary_model: primary_model.into(),
            fallback_model: fallback_model.into(),
        }
    }

    /// Tries the primary model, moving on to the fallback model only when the
    /// primary reports overload.
    pub async fn generate_advice(&self, query: &str, language: &str) -> Result<String, AdviceError> {
        let prompt = build_financial_prompt(query, language);
        let mut last_error = None;

        for model in [&self.primary_model, &self.fallback_model] {
            match self.client.generate(model, &prompt).await {
                Ok(text) => {
                    debug!("Advice generated by {model}");
                    return Ok(text);
                }
                Err(err) => {
                    error!("Error with model {model}: {err}");
                    let classified = AdviceError::from(&err);
                    let retry = classified.is_overloaded();
                    last_error = Some(classified);
                    if !retry {
                        break;
                    }
                }
            }
        }

        Err(last_error.unwrap_or(AdviceError::Unknown {
            detail: "no model was tried".to_string(),
        }))
    }

    /// Never fails: any remote problem yields `GeneralFinance`.
    pub async fn categorize_topic(&self, query: &str) -> FinancialTopic {
        match self
            .client
            .generate(&self.primary_model, &build_topic_prompt(query))
            .await
        {
            Ok(text) => FinancialTopic::parse_lenient(&text),
            Err(err) => {
                warn!("Error categorizing topic: {err}");
                FinancialTopic::GeneralFinance
            }
        }
    }

    /// Whether either model answers a minimal prompt.
    pub async fn test_connectivity(&self) -> bool {
        match self.client.generate(&self.primary_model, CONNECTIVITY_PROMPT).await {
            Ok(text) => return !text.trim().is_empty(),
            Err(err) => error!("API connection test failed: {err}"),
        }
        match self.client.generate(&self.fallback_model, CONNECTIVITY_PROMPT).await {
            Ok(text) => !text.trim().is_empty(),
            Err(err) => {
                error!("Fallback API test also failed: {err}");
                false
            }
        }
    }
}
