use crate::client::CliClient;
use crate::error::Result;
use fg_core::error::ErrorCore;
use fg_core::server::payload::profile_request::{UpdateLanguageRequest, UpdateProfileRequest};
use fg_core::server::payload::profile_stats::ProfileStats;
use fg_core::types::language::find_language;
use fg_core::types::user_profile::UserProfile;

fn print_profile(response: &str) -> Result<()> {
    let profile: UserProfile = serde_json::from_str(response).map_err(ErrorCore::from)?;
    let language = find_language(&profile.preferred_language)
        .map(|l| format!("{} {} ({})", l.flag, l.name, l.native_name))
        .unwrap_or_else(|| profile.preferred_language.clone());
    println!("id:         {}", profile.id);
    println!("name:       {}", profile.name.as_deref().unwrap_or("-"));
    println!("language:   {language}");
    println!("onboarded:  {}", profile.onboarding_completed);
    let topics: Vec<&str> = profile.financial_topics.iter().map(|t| t.label()).collect();
    println!("topics:     {}", topics.join(", "));
    Ok(())
}

pub async fn show(cli_client: &CliClient) -> Result<()> {
    print_profile(&cli_client.get_profile().await?)
}

pub async fn language(cli_client: &CliClient, code: &str) -> Result<()> {
    let request = UpdateLanguageRequest {
        language: code.to_string(),
    };
    print_profile(&cli_client.update_language(&request).await?)
}

pub async fn name(cli_client: &CliClient, name: Option<String>) -> Result<()> {
    print_profile(&cli_client.update_name(&UpdateProfileRequest { name }).await?)
}

pub async fn stats(cli_client: &CliClient) -> Result<()> {
    let stats: ProfileStats =
        serde_json::from_str(&cli_client.profile_stats().await?).map_err(ErrorCore::from)?;
    println!("conversations:  {}", stats.total_conversations);
    println!("messages:       {}", stats.total_messages);
    println!("asked by you:   {}", stats.user_messages);
    let topics: Vec<&str> = stats.unique_topics.iter().map(|t| t.label()).collect();
    println!("topics:         {}", topics.join(", "));
    Ok(())
}
