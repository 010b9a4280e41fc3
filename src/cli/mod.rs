//! Command-line interface definition and dispatch for gemini-cli.
//!
//! Uses [`clap`] for argument parsing with derive macros. A bare prompt runs
//! the one-shot flow; the `chat` subcommand starts an interactive session.

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::provider::{GeminiClient, ModelConfig};
use crate::{ask, chat};

/// Top-level CLI structure for gemini-cli.
///
/// Parsed once in `main` and handed to [`run`]. Either a prompt or a
/// subcommand must be given.
#[derive(Parser, Debug)]
#[command(
    name = "gemini-cli",
    about = "Interact with GoogleAI's Gemini LLMs through the command line",
    subcommand_negates_reqs = true
)]
pub struct Cli {
    /// Prompt to send to the model
    #[arg(required = true, value_parser = NonEmptyStringValueParser::new())]
    pub prompt: Option<String>,

    /// API key for Google AI
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Model to use (overrides config)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive chat with a model
    Chat,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
///
/// Resolves configuration and the API key, builds the client once, and runs
/// the chosen flow. The client is dropped when the flow returns, on success
/// and on error alike.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key(cli.key.as_deref())?;
    let client = GeminiClient::new(&api_key, config.base_url())
        .context("Failed to create Gemini client")?;
    let model = ModelConfig::new(config.model_name(cli.model.as_deref()));

    match cli.command {
        Some(Commands::Chat) => chat::run_chat(&client, model).await,
        None => {
            let prompt = cli
                .prompt
                .context("expect one argument: <prompt>")?;
            ask::run_ask(&client, model, &prompt).await
        }
    }
}
