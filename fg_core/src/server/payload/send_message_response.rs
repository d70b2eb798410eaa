use crate::types::conversation::Conversation;
use crate::types::financial_topic::FinancialTopic;
use crate::types::message::Message;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub conversation: Conversation,
    pub user_message: Message,
    pub bot_message: Message,
    pub topic: FinancialTopic,
    /// Set when the reply came from the local canned table.
    pub fallback: bool,
}
