//! Client layer for Google's Generative Language API.
//!
//! Split into submodules:
//! - [`client`] — [`GeminiClient`], the HTTP transport
//! - [`model`] — [`GenerativeModel`], [`ModelConfig`], and chat sessions
//! - [`sse`] — server-sent events decoding
//! - [`types`] — request/response wire types

mod client;
mod error;
mod model;
mod sse;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use model::{ChatSession, ContentGenerator, GenerativeModel, ModelConfig};
