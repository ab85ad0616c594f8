//! Terminal chat shell — API key prompt, REPL loop, rendering.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use medchat::config;
use medchat::gemini::{GeminiClient, GenerateReply};
use medchat::pipeline::router::{ChatRouter, TurnOutcome};
use medchat::session::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let mut rl = DefaultEditor::new()?;

    println!("{}", "=== Healthcare Assistant Chatbot ===".bright_magenta().bold());
    println!(
        "{}",
        "Provides healthcare-related information using Google's Gemini API.".bright_black()
    );
    println!();

    let api_key = read_api_key(&mut rl)?;
    let client = GeminiClient::with_api_key(&api_key);
    let router = ChatRouter::new(client);
    let mut session = Session::new();

    tracing::info!(session = %session.id, "session started");

    println!();
    println!(
        "{}",
        "Ask a healthcare question. Type 'quit' to exit.".bright_black()
    );
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(&line);
                }

                run_and_render(&router, &mut session, &line);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    tracing::info!(
        session = %session.id,
        messages = session.transcript().len(),
        "session ended"
    );

    Ok(())
}

/// The chat is unavailable until a key is supplied.
fn read_api_key(rl: &mut DefaultEditor) -> Result<String> {
    println!(
        "{}",
        "An API key is required before the chat becomes available.".yellow()
    );
    println!(
        "{}",
        "Note: the key is read as plain terminal input and will be visible as you type."
            .bright_black()
    );

    loop {
        let line = rl.readline("Gemini API key: ")?;
        let key = line.trim();
        if key.is_empty() {
            println!("{}", "Please add your Gemini API key to continue.".yellow());
            continue;
        }
        return Ok(key.to_string());
    }
}

/// Run one turn and print its result as role-tagged transcript lines.
fn run_and_render<G: GenerateReply>(router: &ChatRouter<G>, session: &mut Session, input: &str) {
    match router.run_turn(session, input) {
        Ok(outcome) => render_outcome(input.trim(), &outcome),
        // Validation failure: show the message, append nothing.
        Err(err) => println!("{}", err.to_string().red()),
    }
}

fn render_outcome(input: &str, outcome: &TurnOutcome) {
    println!("{}", format!("[user] {input}").green());

    match &outcome.reply {
        Ok(reply) => {
            println!("{}", "[assistant]".bright_magenta());
            for line in reply.text.lines() {
                println!("{}", line.bright_blue());
            }
        }
        Err(err) => println!("{}", err.to_string().red()),
    }

    if let Some(image) = &outcome.image {
        println!("{}", "Generating relevant medical image...".yellow());
        match image {
            Ok(locator) => {
                // The endpoint returns prose, not image data; render the
                // purported locator as a captioned line.
                println!("{}", format!("[image] {locator}").yellow());
                println!("{}", "Generated Medical Image".bright_black());
            }
            Err(err) => println!("{}", err.to_string().red()),
        }
    }

    println!();
}
