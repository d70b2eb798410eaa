use crate::client::CliClient;
use crate::error::Result;
use crate::prompt::chat::chat_prompt;
use crate::prompt::conversation::prompt_conversation;
use fg_core::error::ErrorCore;
use fg_core::types::user_profile::UserProfile;

pub async fn handle(cli_client: &CliClient, language: Option<String>) -> Result<()> {
    let language = match language {
        Some(language) => language,
        None => {
            let profile: UserProfile =
                serde_json::from_str(&cli_client.get_profile().await?).map_err(ErrorCore::from)?;
            profile.preferred_language
        }
    };

    match prompt_conversation(cli_client).await? {
        Some(conversation) => {
            cli_client.select_conversation(&conversation.id).await?;
            println!("Continuing \"{}\"", conversation.title);
        }
        None => {
            cli_client.create_conversation().await?;
        }
    }

    chat_prompt(cli_client, &language).await
}
