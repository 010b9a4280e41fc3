//! Server-sent events decoding for streamed generations.

use bytes::Bytes;
use futures::{Stream, StreamExt};

use super::GeminiError;
use super::types::{ErrorEnvelope, GenerateContentResponse};

/// Splits an HTTP body into the payloads of its `data:` lines.
///
/// Buffers incoming bytes, splits by newlines, and yields the payload after
/// each `data:` prefix. Only complete lines are decoded, so a character split
/// across chunks survives. A body error or an invalid line is yielded once and
/// ends the stream.
pub fn sse_data_stream<S>(byte_stream: S) -> impl Stream<Item = Result<String, GeminiError>> + Send
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
{
    async_stream::stream! {
        let mut buffer: Vec<u8> = Vec::new();
        let mut byte_stream = Box::pin(byte_stream);

        while let Some(result) = byte_stream.next().await {
            let chunk = match result {
                Ok(bytes) => bytes,
                Err(err) => {
                    yield Err(GeminiError::Http(err));
                    return;
                }
            };
            buffer.extend_from_slice(&chunk);

            while let Some(newline_pos) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..newline_pos + 1).collect();
                match decode_line(&line[..newline_pos]) {
                    Ok(Some(data)) => yield Ok(data),
                    Ok(None) => {}
                    Err(err) => {
                        yield Err(err);
                        return;
                    }
                }
            }
        }

        match decode_line(&buffer) {
            Ok(Some(data)) => yield Ok(data),
            Ok(None) => {}
            Err(err) => yield Err(err),
        }
    }
}

/// Decodes one raw line and extracts its `data:` payload.
fn decode_line(line: &[u8]) -> Result<Option<String>, GeminiError> {
    let line = std::str::from_utf8(line)?;
    Ok(data_payload(line.trim_end()).map(str::to_string))
}

fn data_payload(line: &str) -> Option<&str> {
    let data = line.strip_prefix("data:")?;
    let data = data.strip_prefix(' ').unwrap_or(data);
    if data.is_empty() {
        None
    } else {
        Some(data)
    }
}

/// Decodes one `data:` payload into a response fragment.
///
/// An error envelope delivered mid-stream becomes [`GeminiError::Api`].
pub fn decode_fragment(data: &str) -> Result<GenerateContentResponse, GeminiError> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(data) {
        return Err(GeminiError::Api {
            status: envelope.error.code,
            message: envelope.error.describe(),
        });
    }
    Ok(serde_json::from_str(data)?)
}

/// Turns an HTTP body into a stream of decoded fragments.
pub fn fragment_stream<S>(
    byte_stream: S,
) -> impl Stream<Item = Result<GenerateContentResponse, GeminiError>> + Send
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
{
    sse_data_stream(byte_stream).map(|item| item.and_then(|data| decode_fragment(&data)))
}
