//! Struct definitions for gemini-cli configuration.

use serde::Deserialize;

/// Root configuration, deserialized from `config.toml`.
///
/// All fields are optional so gemini-cli runs with defaults when no config
/// file exists.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Model identifier used when `--model` is not given.
    #[serde(default)]
    pub model: Option<String>,
    /// API key used when neither `--key` nor `API_KEY` is set.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Custom API endpoint (useful for proxies).
    #[serde(default)]
    pub base_url: Option<String>,
}
