//! Interactive chat REPL for gemini-cli.
//!
//! Provides a multi-turn conversation loop using [`rustyline`] for readline
//! support. The [`ChatSession`] keeps the transcript, so every request
//! carries the whole conversation.

mod directive;
mod input;


use anyhow::{Context, Result};

use crate::attachment;
use crate::format;
use crate::message::Part;
use crate::output::{self, Renderer, TerminalRenderer};
use crate::provider::{ChatSession, ContentGenerator, GenerativeModel, ModelConfig};

use directive::Directive;
use input::{LineSource, ReadlineSource};

/// Runs the interactive chat REPL against `client`.
///
/// Prints the banner, then alternates between reading a line and streaming
/// the reply until the user types `exit`/`quit` or input ends. Any error ends
/// the session.
///
/// # Arguments
///
/// * `client` — The authenticated API transport.
/// * `config` — Model name and safety policy for every turn.
pub async fn run_chat(client: &dyn ContentGenerator, config: ModelConfig) -> Result<()> {
    let model = GenerativeModel::new(client, config);
    let mut session = model.start_chat();

    println!("{}", format::banner(&format!("Chatting with {}", model.name())));
    println!("{}", format::banner(crate::constants::CHAT_HELP));

    let mut input = ReadlineSource::open()?;
    let mut renderer = TerminalRenderer::stdout(format::ai_response);
    chat_loop(&mut session, &mut input, &mut renderer).await
}

/// Drives one session until an exit directive or end of input.
///
/// Input reading and streaming strictly alternate: a new line is read only
/// after the previous reply stream has ended.
pub(crate) async fn chat_loop(
    session: &mut ChatSession<'_>,
    input: &mut dyn LineSource,
    renderer: &mut dyn Renderer,
) -> Result<()> {
    while let Some(line) = input.read_line()? {
        let part = match Directive::parse(&line) {
            Directive::Exit => break,
            Directive::Load(path) => attachment::load_part(&path)
                .await
                .with_context(|| format!("error loading file {}", path.display()))?,
            Directive::Prompt(text) => Part::Text(text),
        };

        let mut stream = session.send_message_stream(part).await?;
        while let Some(fragment) = stream.next().await {
            output::render_fragment(&fragment?, renderer);
        }
        renderer.render_done();
        tracing::debug!(turns = session.history().len(), "turn complete");
    }
    Ok(())
}
