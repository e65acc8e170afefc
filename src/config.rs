//! Configuration module for Murmur

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::{DEFAULT_API_URL, normalize_base_url};
use crate::paths;

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "MURMUR_API_URL";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Backend base URL; `/api/v1` is appended when missing
    #[serde(default)]
    pub api_url: Option<String>,

    /// Column at which post text is wrapped
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

const fn default_wrap_width() -> usize {
    72
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        paths::config_path()
    }

    /// Load config from the default path; a missing file gives the defaults
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Effective base URL: `MURMUR_API_URL`, then the file, then the default
    pub fn api_url(&self) -> String {
        self.resolve_api_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_url(&self, env: Option<String>) -> String {
        env.filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_url.clone())
            .map_or_else(|| DEFAULT_API_URL.to_string(), |url| normalize_base_url(&url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.resolve_api_url(None), DEFAULT_API_URL);
    }

    #[test]
    fn test_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_url = \"https://social.example.com\"\nwrap_width = 60\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://social.example.com"));
        assert_eq!(config.wrap_width, 60);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = \"http://10.0.0.5:5001\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.wrap_width, 72);
        assert_eq!(config.resolve_api_url(None), "http://10.0.0.5:5001/api/v1");
    }

    #[test]
    fn test_env_overrides_file() {
        let config = Config {
            api_url: Some("http://file.example".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_api_url(Some("http://env.example/api/v1/".to_string())),
            "http://env.example/api/v1"
        );
        assert_eq!(
            config.resolve_api_url(Some(String::new())),
            "http://file.example/api/v1"
        );
    }
}
