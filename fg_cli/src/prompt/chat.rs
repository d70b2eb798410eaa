use crate::client::CliClient;
use crate::error::{ErrorCli, Result};
use crate::utils::typewriter::typewriter;
use fg_core::error::ErrorCore;
use fg_core::server::payload::send_message_request::SendMessageRequest;
use fg_core::server::payload::send_message_response::SendMessageResponse;
use fg_core::types::conversation::Conversation;
use std::io::{self, BufRead, Write};

const TYPEWRITER_DELAY_MS: u64 = 8;

enum ChatInput {
    Exit,
    NewConversation,
    Skip,
    Message(String),
}

fn parse_input(line: &str) -> ChatInput {
    let line = line.trim();
    if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        ChatInput::Exit
    } else if line.eq_ignore_ascii_case("/new") {
        ChatInput::NewConversation
    } else if line.is_empty() {
        ChatInput::Skip
    } else {
        ChatInput::Message(line.to_string())
    }
}

pub async fn chat_prompt(cli_client: &CliClient, language: &str) -> Result<()> {
    println!("Ask FinGuru anything about money ('/new' for a fresh conversation, 'exit' to quit):");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        match parse_input(&input) {
            ChatInput::Exit => {
                println!("Goodbye!");
                break;
            }
            ChatInput::Skip => continue,
            ChatInput::NewConversation => {
                let created = cli_client.create_conversation().await?;
                let conversation: Conversation =
                    serde_json::from_str(&created).map_err(ErrorCore::from)?;
                println!("Started {}", conversation.id);
            }
            ChatInput::Message(content) => {
                let request = SendMessageRequest {
                    content,
                    language: language.to_string(),
                };
                match cli_client.send_message(&request).await {
                    Ok(response) => {
                        let outcome: SendMessageResponse =
                            serde_json::from_str(&response).map_err(ErrorCore::from)?;
                        typewriter(&outcome.bot_message.content, TYPEWRITER_DELAY_MS)?;
                        if outcome.fallback {
                            println!("(offline answer, the AI service could not be reached)");
                        }
                        println!("[{}]", outcome.topic);
                    }
                    Err(err @ ErrorCli::ConnectionRefused(_)) => return Err(err),
                    Err(err) => eprintln!("❌ {err}"),
                }
            }
        }
    }
    Ok(())
}
