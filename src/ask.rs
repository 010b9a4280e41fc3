//! One-shot prompt: stream a single reply to standard output and return.

use anyhow::Result;
use futures::StreamExt;

use crate::format;
use crate::message::Part;
use crate::output::{self, Renderer, TerminalRenderer};
use crate::provider::{ContentGenerator, GenerativeModel, ModelConfig};

/// Sends `prompt` to the model and prints the streamed reply, unstyled.
pub async fn run_ask(
    client: &dyn ContentGenerator,
    config: ModelConfig,
    prompt: &str,
) -> Result<()> {
    let model = GenerativeModel::new(client, config);
    let mut renderer = TerminalRenderer::stdout(format::plain);
    ask(&model, prompt, &mut renderer).await
}

/// Streams the reply to `prompt` into `renderer`, followed by a newline.
///
/// Fragments without candidates render a placeholder; a stream error aborts
/// with that error.
pub(crate) async fn ask(
    model: &GenerativeModel<'_>,
    prompt: &str,
    renderer: &mut dyn Renderer,
) -> Result<()> {
    let mut stream = model
        .generate_content_stream(vec![Part::text(prompt)])
        .await?;
    let mut fragments = 0usize;
    while let Some(fragment) = stream.next().await {
        output::render_fragment(&fragment?, renderer);
        fragments += 1;
    }
    tracing::debug!(fragments, "stream finished");
    renderer.render_done();
    Ok(())
}
