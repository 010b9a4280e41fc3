//! Scripted [`ContentGenerator`] for exercising the chat and ask flows
//! without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::stream;

use super::GeminiError;
use super::model::{ContentGenerator, ResponseStream};
use super::types::{GenerateContentRequest, GenerateContentResponse};

type Script = Vec<Result<GenerateContentResponse, GeminiError>>;

/// Replays one scripted stream per request and records every request.
pub struct ScriptedGenerator {
    scripts: Mutex<VecDeque<Script>>,
    requests: Mutex<Vec<(String, GenerateContentRequest)>>,
}

impl ScriptedGenerator {
    pub fn new(scripts: Vec<Script>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, r)| r.clone())
            .collect()
    }

    pub fn models(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(m, _)| m.clone())
            .collect()
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn stream_generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<ResponseStream, GeminiError> {
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), request.clone()));
        let script = self
            .scripts
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left");
        Ok(Box::pin(stream::iter(script)))
    }
}

/// A fragment whose first candidate holds `text`.
pub fn text_response(text: &str) -> GenerateContentResponse {
    serde_json::from_value(serde_json::json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
    }))
    .unwrap()
}

/// A fragment with no candidates.
pub fn empty_response() -> GenerateContentResponse {
    GenerateContentResponse::default()
}
