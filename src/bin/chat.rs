//! Terminal front-end for the local Ollama chat.
//!
//! Talks to Ollama directly (no relay in between), one request at a time.

use std::io::Write as _;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use ollama_chat::message::Model;
use ollama_chat::services::chat_session::{ChatSession, SubmitOutcome};
use ollama_chat::services::ollama::OllamaClient;

#[tokio::main]
async fn main() -> Result<()> {
    let mut session = ChatSession::new(OllamaClient::new());

    println!("How can I help you today?");
    println!(
        "Start a conversation and I'll do my best to assist you using {}.",
        session.model()
    );
    println!(
        "Models: {}. Switch with /model <name>, leave with /quit.",
        Model::ALL.map(|m| m.as_str()).join(", ")
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim().to_string();

        if input == "/quit" {
            break;
        }
        if let Some(name) = input.strip_prefix("/model") {
            let name = name.trim();
            match Model::from_name(name) {
                Some(model) => {
                    session.select_model(model);
                    println!("Connected to {model}");
                }
                None => println!(
                    "Unknown model '{name}'. Installed models: {}",
                    Model::ALL.map(|m| m.as_str()).join(", ")
                ),
            }
            continue;
        }

        println!("Processing your request...");
        match session.submit(&input).await {
            SubmitOutcome::Skipped => continue,
            SubmitOutcome::Answered | SubmitOutcome::Failed => {
                if let Some(reply) = session.transcript().last() {
                    println!("{}> {}", session.model(), reply.content);
                }
                match session.last_error() {
                    Some(_) => println!("(Error connecting to AI model)"),
                    None => println!("(Connected to {})", session.model()),
                }
            }
        }
    }

    Ok(())
}
