use clap::Parser;
use clap::Subcommand;
use fg_core::server::default_config::DEFAULT_CLIENT_BASE_URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal client for the FinGuru financial advisor", long_about = None)]
pub struct Cli {
    /// Base URL of the FinGuru backend
    #[arg(long, global = true, default_value = DEFAULT_CLIENT_BASE_URL)]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat interactively; `/new` starts a fresh conversation, `exit` leaves
    Chat {
        /// Reply language code, defaults to the profile's preferred language
        #[arg(short, long)]
        language: Option<String>,
    },
    #[command(subcommand)]
    Conversations(ConversationCommands),
    #[command(subcommand)]
    Profile(ProfileCommands),
    /// Download profile and conversations as JSON
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete every stored conversation and the profile
    Clear {
        #[arg(short, long)]
        yes: bool,
    },
    Health,
    TestGemini,
    Languages,
}

#[derive(Subcommand, Debug)]
pub enum ConversationCommands {
    List,
    Delete {
        #[arg()]
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    Show,
    Language {
        #[arg()]
        code: String,
    },
    /// Set the display name; omit it to clear
    Name {
        #[arg()]
        name: Option<String>,
    },
    Stats,
}
