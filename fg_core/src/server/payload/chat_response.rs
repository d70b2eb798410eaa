use crate::types::financial_topic::FinancialTopic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub category: FinancialTopic,
    pub timestamp: DateTime<Utc>,
}

/// Liveness answer of `GET /chat`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatStatusResponse {
    pub message: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
