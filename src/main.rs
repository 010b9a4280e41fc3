//! Entry point for gemini-cli, a terminal client for Google's Gemini models.
//!
//! This binary loads environment variables, sets up logging, parses CLI
//! arguments via [`cli`], and dispatches to the chosen flow. Every error
//! propagates back here and decides the exit status.

mod ask;
mod attachment;
mod chat;
mod cli;
mod config;
mod constants;
mod format;
mod message;
mod output;
mod provider;

use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Runs the gemini-cli CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments into a [`cli::Cli`] struct, and dispatches via [`cli::run`].
/// Errors are printed to standard error and turn into a failure exit code.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = cli::parse();
    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to standard error so they never mix with streamed output.
/// Filtered by `RUST_LOG`, warnings only by default.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}
