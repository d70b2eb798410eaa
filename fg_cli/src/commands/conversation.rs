use crate::client::CliClient;
use crate::error::Result;
use fg_core::error::ErrorCore;
use fg_core::types::conversation::Conversation;

pub async fn list(cli_client: &CliClient) -> Result<()> {
    let response = cli_client.list_conversations().await?;
    let conversations: Vec<Conversation> =
        serde_json::from_str(&response).map_err(ErrorCore::from)?;
    if conversations.is_empty() {
        println!("No conversations yet.");
        return Ok(());
    }
    println!("id\t\t\t\t\ttitle\n======");
    for conversation in conversations {
        let topics: Vec<&str> = conversation.topics.iter().map(|t| t.label()).collect();
        println!("{}\t{}  {}", conversation.id, conversation, topics.join(", "));
    }
    Ok(())
}

pub async fn delete(cli_client: &CliClient, conversation_id: &str) -> Result<()> {
    cli_client.delete_conversation(conversation_id).await?;
    println!("Deleted {conversation_id}");
    Ok(())
}
