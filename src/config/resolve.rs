//! Environment variable substitution, API key and model resolution.

use anyhow::Result;

use super::types::Config;
use crate::constants::{API_KEY_ENV, DEFAULT_MODEL};

impl Config {
    /// Resolve {env:VAR_NAME} patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        for field in [&mut self.model, &mut self.api_key, &mut self.base_url] {
            if let Some(value) = field {
                *value = Self::resolve_str(value);
            }
        }
    }

    /// Replace {env:VAR} with the environment variable value.
    /// Substituted values are not expanded again.
    fn resolve_str(s: &str) -> String {
        let mut result = s.to_string();
        let mut from = 0;
        while let Some(offset) = result[from..].find("{env:") {
            let start = from + offset;
            let Some(end) = result[start..].find('}') else {
                break;
            };
            let var_name = &result[start + 5..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
            from = start + value.len();
        }
        result
    }

    /// Resolve the API key: `--key` flag first, then the `API_KEY` env var,
    /// then the config value. Empty values are skipped.
    pub fn resolve_api_key(&self, flag: Option<&str>) -> Result<String> {
        let env = std::env::var(API_KEY_ENV).ok();
        self.api_key_from(flag, env.as_deref())
    }

    fn api_key_from(&self, flag: Option<&str>, env: Option<&str>) -> Result<String> {
        [flag, env, self.api_key.as_deref()]
            .into_iter()
            .flatten()
            .find(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unable to obtain API key for Google AI; use --key or {} env var",
                    API_KEY_ENV
                )
            })
    }

    /// Resolve the model: `--model` flag, then config, then the built-in default.
    pub fn model_name(&self, flag: Option<&str>) -> String {
        flag.or(self.model.as_deref())
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL)
            .to_string()
    }

    /// Custom endpoint, if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|u| !u.is_empty())
    }
}
