//! Generative model handle and multi-turn chat sessions.
//!
//! [`GenerativeModel`] binds a [`ContentGenerator`] to an immutable
//! [`ModelConfig`]. [`ChatSession`] owns the conversation transcript and
//! appends the user turn before each request and the model's reply once its
//! stream has ended.

use std::pin::Pin;

use async_trait::async_trait;
use futures::{Stream, StreamExt};

use super::GeminiError;
use super::types::{
    GenerateContentRequest, GenerateContentResponse, HarmBlockThreshold, HarmCategory,
    SafetySetting, WireContent,
};
use crate::message::{Content, Part};

/// Lazily produced response fragments. `None` marks the end of the stream;
/// failures arrive as `Some(Err(_))`.
pub type ResponseStream =
    Pin<Box<dyn Stream<Item = Result<GenerateContentResponse, GeminiError>> + Send>>;

/// Transport that can open a streaming generation.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn stream_generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<ResponseStream, GeminiError>;
}

/// Model identifier plus the fixed safety policy sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    name: String,
    safety_settings: Vec<SafetySetting>,
}

impl ModelConfig {
    /// Dangerous-content and harassment filters are both set to block none.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            safety_settings: vec![
                SafetySetting {
                    category: HarmCategory::DangerousContent,
                    threshold: HarmBlockThreshold::BlockNone,
                },
                SafetySetting {
                    category: HarmCategory::Harassment,
                    threshold: HarmBlockThreshold::BlockNone,
                },
            ],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn safety_settings(&self) -> &[SafetySetting] {
        &self.safety_settings
    }
}

/// A model bound to a transport.
pub struct GenerativeModel<'c> {
    client: &'c dyn ContentGenerator,
    config: ModelConfig,
}

impl<'c> GenerativeModel<'c> {
    pub fn new(client: &'c dyn ContentGenerator, config: ModelConfig) -> Self {
        Self { client, config }
    }

    pub fn name(&self) -> &str {
        self.config.name()
    }

    fn build_request(&self, contents: &[Content]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: contents.iter().map(WireContent::from).collect(),
            safety_settings: self.config.safety_settings().to_vec(),
        }
    }

    /// Streams a single-turn generation for `parts`.
    pub async fn generate_content_stream(
        &self,
        parts: Vec<Part>,
    ) -> Result<ResponseStream, GeminiError> {
        let request = self.build_request(&[Content::user(parts)]);
        self.client
            .stream_generate_content(self.name(), &request)
            .await
    }

    /// Starts a conversation with an empty transcript.
    pub fn start_chat(&self) -> ChatSession<'_> {
        ChatSession {
            model: self,
            history: Vec::new(),
        }
    }
}

/// An ongoing conversation with a model.
pub struct ChatSession<'m> {
    model: &'m GenerativeModel<'m>,
    history: Vec<Content>,
}

impl<'m> ChatSession<'m> {
    /// Turns recorded so far, oldest first.
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Appends `part` as the next user turn and streams the reply.
    ///
    /// The reply is recorded as a model turn when the returned stream
    /// reaches its end.
    pub async fn send_message_stream(
        &mut self,
        part: Part,
    ) -> Result<ChatStream<'_>, GeminiError> {
        self.history.push(Content::user(vec![part]));
        let request = self.model.build_request(&self.history);
        let inner = self
            .model
            .client
            .stream_generate_content(self.model.name(), &request)
            .await?;
        Ok(ChatStream {
            history: &mut self.history,
            inner,
            reply: Vec::new(),
            fragments: 0,
            finished: false,
        })
    }
}

/// Reply stream of one chat turn.
pub struct ChatStream<'s> {
    history: &'s mut Vec<Content>,
    inner: ResponseStream,
    reply: Vec<Part>,
    fragments: usize,
    finished: bool,
}

impl ChatStream<'_> {
    /// Pulls the next fragment. On end of stream the accumulated reply is
    /// appended to the transcript; an empty reply records nothing.
    pub async fn next(&mut self) -> Option<Result<GenerateContentResponse, GeminiError>> {
        if self.finished {
            return None;
        }
        match self.inner.next().await {
            Some(Ok(response)) => {
                self.fragments += 1;
                if let Some(content) = response.first_content() {
                    for part in content.parts.iter().filter_map(|p| p.to_part()) {
                        merge_part(&mut self.reply, part);
                    }
                }
                Some(Ok(response))
            }
            Some(Err(err)) => {
                self.finished = true;
                Some(Err(err))
            }
            None => {
                self.finished = true;
                tracing::debug!(fragments = self.fragments, "chat stream finished");
                if !self.reply.is_empty() {
                    self.history
                        .push(Content::model(std::mem::take(&mut self.reply)));
                }
                None
            }
        }
    }
}

/// Appends `part`, concatenating adjacent text parts.
fn merge_part(parts: &mut Vec<Part>, part: Part) {
    if let (Some(Part::Text(last)), Part::Text(text)) = (parts.last_mut(), &part) {
        last.push_str(text);
        return;
    }
    parts.push(part);
}
