//! Configuration types and path resolution for gemini-cli.
//!
//! Settings are stored as TOML at the platform's XDG config path
//! (e.g. `~/.config/gemini-cli/config.toml` on Linux), optionally overridden
//! by a `gemini-cli.toml` in the current project.

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::Config;

use anyhow::Result;

impl Config {
    /// Load config with precedence: project > global > defaults.
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_project(std::env::current_dir()?)?;

        let mut config = global;
        if let Some(proj) = project {
            config = Self::merge(config, proj);
        }

        config.resolve_substitutions();
        Ok(config)
    }
}
