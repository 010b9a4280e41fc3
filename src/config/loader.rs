//! File loading and merging for gemini-cli configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

impl Config {
    /// Loads the global config from `~/.config/gemini-cli/config.toml`.
    ///
    /// A missing file yields the defaults; nothing is written.
    pub(super) fn load_global() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::read_file(&path)
    }

    /// Look for gemini-cli.toml in `start`, then walk up to the git root.
    pub(super) fn load_project(start: PathBuf) -> Result<Option<Config>> {
        let mut dir = start;
        loop {
            let candidate = dir.join(crate::constants::PROJECT_CONFIG_FILENAME);
            if candidate.exists() {
                return Self::read_file(&candidate).map(Some);
            }
            // Stop at git root or filesystem root
            if dir.join(".git").exists() || !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    fn read_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Merge project config over global config.
    /// Project values win when present.
    pub(super) fn merge(global: Config, project: Config) -> Config {
        Config {
            model: project.model.or(global.model),
            api_key: project.api_key.or(global.api_key),
            base_url: project.base_url.or(global.base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_values_win() {
        let global = Config {
            model: Some("global-model".into()),
            api_key: Some("global-key".into()),
            base_url: None,
        };
        let project = Config {
            model: Some("project-model".into()),
            api_key: None,
            base_url: Some("http://proxy".into()),
        };
        let merged = Config::merge(global, project);
        assert_eq!(merged.model.as_deref(), Some("project-model"));
        assert_eq!(merged.api_key.as_deref(), Some("global-key"));
        assert_eq!(merged.base_url.as_deref(), Some("http://proxy"));
    }

    #[test]
    fn project_file_found_in_parent() {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join(crate::constants::PROJECT_CONFIG_FILENAME),
            "model = \"gemini-1.5-pro\"\n",
        )
        .unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = Config::load_project(nested).unwrap().unwrap();
        assert_eq!(config.model.as_deref(), Some("gemini-1.5-pro"));
    }

    #[test]
    fn search_stops_at_git_root() {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join(crate::constants::PROJECT_CONFIG_FILENAME),
            "model = \"outside\"\n",
        )
        .unwrap();
        let repo = root.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert!(Config::load_project(repo).unwrap().is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join(crate::constants::PROJECT_CONFIG_FILENAME),
            "model = [",
        )
        .unwrap();
        fs::create_dir_all(root.path().join(".git")).unwrap();

        let err = Config::load_project(root.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
