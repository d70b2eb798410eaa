use crate::client::CliClient;
use crate::error::Result;
use fg_core::error::ErrorCore;
use fg_core::types::conversation::{Conversation, NEW_CONVERSATION_TITLE};
use inquire::{InquireError, Select};
use std::fmt::Display;

enum ConversationChoice {
    New,
    Existing(Conversation),
}

impl Display for ConversationChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversationChoice::New => write!(f, "{NEW_CONVERSATION_TITLE}"),
            ConversationChoice::Existing(conversation) => write!(f, "{conversation}"),
        }
    }
}

/// Lets the user pick a stored conversation or start a new one.
///
/// Returns `Ok(None)` for a new conversation, also when the picker is
/// cancelled or nothing is stored yet.
pub async fn prompt_conversation(cli_client: &CliClient) -> Result<Option<Conversation>> {
    let response = cli_client.list_conversations().await?;
    let conversations: Vec<Conversation> =
        serde_json::from_str(&response).map_err(ErrorCore::from)?;
    if conversations.is_empty() {
        return Ok(None);
    }

    let mut options = vec![ConversationChoice::New];
    options.extend(conversations.into_iter().map(ConversationChoice::Existing));

    let ans: std::result::Result<ConversationChoice, InquireError> =
        Select::new("Choose a conversation", options).prompt();

    match ans {
        Ok(ConversationChoice::Existing(conversation)) => Ok(Some(conversation)),
        Ok(ConversationChoice::New) | Err(_) => Ok(None),
    }
}
