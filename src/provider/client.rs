//! HTTP client for the Generative Language API.
//!
//! Contains [`GeminiClient`], the production [`ContentGenerator`]: one
//! streaming endpoint, authenticated with an API key header, decoded from
//! server-sent events.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Response};

use super::GeminiError;
use super::model::{ContentGenerator, ResponseStream};
use super::sse::fragment_stream;
use super::types::{ErrorEnvelope, GenerateContentRequest};
use crate::constants::{API_VERSION, CONNECT_TIMEOUT_SECS, DEFAULT_BASE_URL};

/// Authenticated client for the Generative Language API.
///
/// Holds one pooled HTTP client for its whole lifetime; connections are
/// released when the client is dropped.
pub struct GeminiClient {
    client: ReqwestClient,
    headers: HeaderMap,
    base_url: String,
}

impl GeminiClient {
    /// Builds a client for `api_key`, talking to `base_url` or the public
    /// endpoint when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid header value or the HTTP
    /// client cannot be constructed.
    pub fn new(api_key: &str, base_url: Option<&str>) -> Result<Self, GeminiError> {
        let mut key = HeaderValue::from_str(api_key)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("x-goog-api-key", key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("text/event-stream"));

        let client = ReqwestClient::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            headers,
            base_url: base_url
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }

    fn stream_url(&self, model: &str) -> String {
        format!(
            "{}/{}/{}:streamGenerateContent?alt=sse",
            self.base_url,
            API_VERSION,
            model_resource(model)
        )
    }

    /// Converts a non-2xx response into [`GeminiError::Api`].
    async fn error_from_response(response: Response) -> GeminiError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "failed to read response body".into());
        api_error(status, &body)
    }
}

/// Prefers the API's error envelope over the raw body.
fn api_error(status: u16, body: &str) -> GeminiError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.describe(),
        Err(_) => body.to_string(),
    };
    GeminiError::Api { status, message }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn stream_generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<ResponseStream, GeminiError> {
        let url = self.stream_url(model);
        tracing::debug!(model, turns = request.contents.len(), "streamGenerateContent");

        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Ok(Box::pin(fragment_stream(response.bytes_stream())))
    }
}

/// Model names are resources under `models/` unless already qualified.
fn model_resource(model: &str) -> String {
    if model.contains('/') {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}
