//! User configuration loaded from `config.toml` in the data directory.

use std::path::Path;

use driftdeck_engine::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::persist::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Rows per page on startup. Must be one of the grid's fixed choices.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Source fetched when `--source` is not passed.
    #[serde(default)]
    pub default_source: Option<String>,
    /// Host connector command line, split on whitespace.
    #[serde(default)]
    pub host_command: Option<String>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            default_source: None,
            host_command: None,
        }
    }
}

impl Config {
    /// Load from `config.toml` under `data_dir`; a missing file yields the
    /// defaults.
    pub fn load_from(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let mut config: Config = toml::from_str(&content)?;

        if !PAGE_SIZES.contains(&config.default_page_size) {
            warn!(
                configured = config.default_page_size,
                "default_page_size is not an offered choice; using {}", DEFAULT_PAGE_SIZE
            );
            config.default_page_size = DEFAULT_PAGE_SIZE;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
        assert!(config.default_source.is_none());
        assert!(config.host_command.is_none());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "default_source = \"prod\"\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.default_source.as_deref(), Some("prod"));
        assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn unknown_page_size_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "default_page_size = 7\n").unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
    }
}
