//! Output rendering abstraction for gemini-cli.
//!
//! Defines the [`Renderer`] trait that decouples streamed model output from
//! the terminal. [`TerminalRenderer`] writes fragments to any [`Write`]
//! sink (standard output in the binary, a buffer in tests).

use std::io::{self, Write};

use crate::constants::EMPTY_RESPONSE_PLACEHOLDER;
use crate::provider::types::GenerateContentResponse;

/// Trait for rendering model output.
pub trait Renderer {
    /// Render a text fragment as it arrives.
    fn render_token(&mut self, token: &str);

    /// Render the placeholder for a fragment with no candidate content.
    fn render_placeholder(&mut self);

    /// Called when the stream has ended.
    fn render_done(&mut self);
}

/// Writes each fragment immediately, styled by `paint`.
///
/// Each token is written with an explicit flush so the user sees a "typing"
/// effect.
pub struct TerminalRenderer<W: Write> {
    out: W,
    paint: fn(&str) -> String,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(paint: fn(&str) -> String) -> Self {
        Self::new(io::stdout(), paint)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, paint: fn(&str) -> String) -> Self {
        Self { out, paint }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_token(&mut self, token: &str) {
        write!(self.out, "{}", (self.paint)(token)).ok();
        self.out.flush().ok();
    }

    fn render_placeholder(&mut self) {
        writeln!(self.out, "{}", EMPTY_RESPONSE_PLACEHOLDER).ok();
        self.out.flush().ok();
    }

    fn render_done(&mut self) {
        writeln!(self.out).ok();
        self.out.flush().ok();
    }
}

/// Renders every text part of the first candidate, in order.
///
/// A fragment without candidate content renders the placeholder instead.
pub fn render_fragment(response: &GenerateContentResponse, renderer: &mut dyn Renderer) {
    let Some(content) = response.first_content() else {
        if let Some(reason) = response.block_reason() {
            tracing::warn!(reason, "prompt blocked");
        }
        renderer.render_placeholder();
        return;
    };
    for text in content.parts.iter().filter_map(|p| p.text.as_deref()) {
        renderer.render_token(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format;
    use crate::provider::testing::{empty_response, text_response};

    fn rendered(f: impl FnOnce(&mut TerminalRenderer<Vec<u8>>)) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new(), format::plain);
        f(&mut renderer);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn fragments_render_in_arrival_order() {
        let out = rendered(|r| {
            render_fragment(&text_response("He"), r);
            render_fragment(&text_response("llo!"), r);
            r.render_done();
        });
        assert_eq!(out, "Hello!\n");
    }

    #[test]
    fn empty_fragment_renders_placeholder() {
        let out = rendered(|r| render_fragment(&empty_response(), r));
        assert_eq!(out, "<empty response from model>\n");
    }

    #[test]
    fn candidate_without_content_renders_placeholder() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        let out = rendered(|r| render_fragment(&response, r));
        assert_eq!(out, "<empty response from model>\n");
    }

    #[test]
    fn all_text_parts_of_first_candidate_render() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [
                {"content": {"parts": [{"text": "a"}, {"inlineData": {"mimeType": "image/png", "data": ""}}, {"text": "b"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]}"#,
        )
        .unwrap();
        let out = rendered(|r| render_fragment(&response, r));
        assert_eq!(out, "ab");
    }

    #[test]
    fn paint_is_applied_per_token() {
        fn shout(text: &str) -> String {
            text.to_uppercase()
        }
        let mut renderer = TerminalRenderer::new(Vec::new(), shout);
        renderer.render_token("hi");
        assert_eq!(String::from_utf8(renderer.into_inner()).unwrap(), "HI");
    }
}
