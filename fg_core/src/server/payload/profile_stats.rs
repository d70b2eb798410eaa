use crate::types::financial_topic::FinancialTopic;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_conversations: usize,
    pub total_messages: usize,
    pub user_messages: usize,
    pub unique_topics: Vec<FinancialTopic>,
}
