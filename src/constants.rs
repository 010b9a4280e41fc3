//! Centralized constants for gemini-cli.
//!
//! All magic numbers, default strings, and configuration constants live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "gemini-cli";

/// Model used when neither `--model` nor the config file names one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Environment variable consulted when `--key` is absent.
pub const API_KEY_ENV: &str = "API_KEY";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "gemini-cli.toml";

/// Readline history filename.
pub const HISTORY_FILENAME: &str = "chat_history.txt";

// --- API ---

/// Default endpoint of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// API version segment of every request path.
pub const API_VERSION: &str = "v1beta";

/// Seconds allowed for establishing the HTTP connection. Streams themselves
/// have no deadline.
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

// --- Output ---

/// Printed in place of a fragment that carries no candidate content.
pub const EMPTY_RESPONSE_PLACEHOLDER: &str = "<empty response from model>";

/// Second banner line of the interactive session.
pub const CHAT_HELP: &str = "Type 'exit' or 'quit' to exit, or '$load <file path>' to load a file";

// --- Chat directives ---

/// Lines that end the interactive session.
pub const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// Prefix of the file-loading directive.
pub const LOAD_DIRECTIVE: &str = "$load";

// --- Attachments ---

/// Largest file `$load` will inline into a request (20 MiB).
pub const MAX_ATTACHMENT_SIZE: u64 = 20 * 1024 * 1024;

/// Byte threshold for binary file detection (check first N bytes for null).
pub const BINARY_DETECTION_BYTES: usize = 8192;
