use crate::cli::{Cli, Commands, ConversationCommands, ProfileCommands};
use crate::client::CliClient;
use crate::error::Result;
use clap::Parser;
mod cli;
mod client;
mod commands;
mod error;
mod prompt;
mod utils;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let cli_client = CliClient::new(&cli.server);

    match cli.command {
        Commands::Chat { language } => commands::chat::handle(&cli_client, language).await?,
        Commands::Conversations(conversation_commands) => match conversation_commands {
            ConversationCommands::List => commands::conversation::list(&cli_client).await?,
            ConversationCommands::Delete { id } => {
                commands::conversation::delete(&cli_client, &id).await?
            }
        },
        Commands::Profile(profile_commands) => match profile_commands {
            ProfileCommands::Show => commands::profile::show(&cli_client).await?,
            ProfileCommands::Language { code } => {
                commands::profile::language(&cli_client, &code).await?
            }
            ProfileCommands::Name { name } => commands::profile::name(&cli_client, name).await?,
            ProfileCommands::Stats => commands::profile::stats(&cli_client).await?,
        },
        Commands::Export { output } => commands::export::handle(&cli_client, output).await?,
        Commands::Clear { yes } => commands::clear::handle(&cli_client, yes).await?,
        Commands::Health => commands::health::health(&cli_client).await?,
        Commands::TestGemini => commands::health::test_gemini(&cli_client).await?,
        Commands::Languages => commands::languages::handle(&cli_client).await?,
    }

    Ok(())
}
