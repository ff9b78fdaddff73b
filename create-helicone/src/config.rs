//! Startup configuration, resolved once and passed down explicitly.

use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use helicone_scaffold::ScaffoldConfig;
use helicone_templates::github::CODELOAD_URL;
use helicone_templates::source::{DEFAULT_REF, DEFAULT_REGISTRY};

pub const REGISTRY_ENV: &str = "CREATE_HELICONE_REGISTRY";
pub const REF_ENV: &str = "CREATE_HELICONE_REF";
pub const CODELOAD_URL_ENV: &str = "CREATE_HELICONE_CODELOAD_URL";
pub const TEST_MODE_ENV: &str = "CREATE_HELICONE_TEST_MODE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub version: &'static str,
    pub scaffold: ScaffoldConfig,
    /// Host serving template tarballs.
    pub codeload_url: String,
    /// Whether questions can be asked on the terminal.
    pub interactive: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine the current directory")?;
        let interactive = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();
        Ok(Self::from_lookup(cwd, interactive, |key| env::var(key).ok()))
    }

    fn from_lookup<F>(cwd: PathBuf, interactive: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            version: env!("CARGO_PKG_VERSION"),
            scaffold: ScaffoldConfig {
                cwd,
                registry: non_empty(REGISTRY_ENV).unwrap_or_else(|| DEFAULT_REGISTRY.to_string()),
                reference: non_empty(REF_ENV).unwrap_or_else(|| DEFAULT_REF.to_string()),
            },
            codeload_url: non_empty(CODELOAD_URL_ENV).unwrap_or_else(|| CODELOAD_URL.to_string()),
            interactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(PathBuf::from("/work"), false, |key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config.scaffold.registry, "colegottdank/helicone-templates");
        assert_eq!(config.scaffold.reference, "HEAD");
        assert_eq!(config.scaffold.cwd, PathBuf::from("/work"));
        assert_eq!(config.codeload_url, "https://codeload.github.com");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_env_overrides() {
        let config = config_with(&[
            (REGISTRY_ENV, "acme/starters"),
            (REF_ENV, "v2"),
            (CODELOAD_URL_ENV, "http://localhost:8080"),
        ]);
        assert_eq!(config.scaffold.registry, "acme/starters");
        assert_eq!(config.scaffold.reference, "v2");
        assert_eq!(config.codeload_url, "http://localhost:8080");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = config_with(&[(REGISTRY_ENV, "  ")]);
        assert_eq!(config.scaffold.registry, "colegottdank/helicone-templates");
    }
}
