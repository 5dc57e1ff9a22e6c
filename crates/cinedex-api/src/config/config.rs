//! `TmdbConfig` struct, TOML read/write and environment overlay.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::TmdbClientBuilder;
use crate::retry::RetryPolicy;

/// Environment variable overriding `api_key`.
const ENV_API_KEY: &str = "TMDB_API_KEY";

/// Environment variable overriding `bearer_token`.
const ENV_BEARER_TOKEN: &str = "TMDB_BEARER_TOKEN";

/// Environment variable overriding `base_url`.
const ENV_BASE_URL: &str = "TMDB_BASE_URL";

/// Client settings as stored in `config.toml`.
///
/// ```toml
/// api_key = "..."
/// timeout_secs = 10
///
/// [retry]
/// max_retries = 3
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TmdbConfig {
    /// v3 API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// v4 read access token. Used instead of `api_key` when both are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    /// API base URL (default: `https://api.themoviedb.org/3/`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// User-Agent header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Retry settings.
    #[serde(default)]
    pub retry: RetryConfig,
}

/// `[retry]` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt (0 disables retrying).
    pub max_retries: u32,
    /// Lower bound between retries, in milliseconds.
    pub min_backoff_ms: u64,
    /// Upper bound between retries, in milliseconds.
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::disabled();
        Self {
            max_retries: policy.max_retries(),
            min_backoff_ms: duration_millis(policy.min_backoff()),
            max_backoff_ms: duration_millis(policy.max_backoff()),
        }
    }
}

impl RetryConfig {
    /// Converts to the transport's policy.
    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_retries,
            Duration::from_millis(self.min_backoff_ms),
            Duration::from_millis(self.max_backoff_ms),
        )
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl TmdbConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Loads config from a TOML file, then applies `TMDB_*` variables from
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_env_overrides(path: &Path) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Overrides file values with `TMDB_API_KEY`, `TMDB_BEARER_TOKEN` and
    /// `TMDB_BASE_URL` as returned by `lookup`. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(token) = get(ENV_BEARER_TOKEN) {
            self.bearer_token = Some(token);
        }
        if let Some(url) = get(ENV_BASE_URL) {
            self.base_url = Some(url);
        }
    }

    /// Whether any credential is configured.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.api_key.is_some() || self.bearer_token.is_some()
    }

    /// Turns the config into a client builder.
    ///
    /// Credentials are not checked here; `build()` on the returned builder
    /// fails when none are set.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn client_builder(&self) -> Result<TmdbClientBuilder> {
        let mut builder = TmdbClientBuilder::new().retry_policy(self.retry.policy());

        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_token(token.clone());
        } else if let Some(key) = &self.api_key {
            builder = builder.api_key(key.clone());
        }
        if let Some(raw) = &self.base_url {
            let url = Url::parse(raw)
                .with_context(|| format!("invalid base_url: {raw}"))?;
            builder = builder.base_url(url);
        }
        if let Some(ua) = &self.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = TmdbConfig::default();

        // Assert
        assert!(!config.has_credentials());
        assert_eq!(config.retry.max_retries, 0);
        assert_eq!(config.retry.min_backoff_ms, 1000);
        assert_eq!(config.retry.max_backoff_ms, 30_000);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        // Act
        let config = TmdbConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, TmdbConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = TmdbConfig {
            api_key: Some(String::from("abc123")),
            timeout_secs: Some(10),
            retry: RetryConfig {
                max_retries: 3,
                min_backoff_ms: 200,
                max_backoff_ms: 5_000,
            },
            ..TmdbConfig::default()
        };

        // Act
        config.save(&path).unwrap();
        let loaded = TmdbConfig::load(&path).unwrap();

        // Assert
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_partial_retry_table() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_key = \"k\"\n\n[retry]\nmax_retries = 2\n").unwrap();

        // Act
        let config = TmdbConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.retry.max_retries, 2);
        assert_eq!(config.retry.min_backoff_ms, 1000);
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_key = [").unwrap();

        // Act
        let result = TmdbConfig::load(&path);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_file_values() {
        // Arrange
        let mut config = TmdbConfig {
            api_key: Some(String::from("from-file")),
            base_url: Some(String::from("https://file.example/3/")),
            ..TmdbConfig::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("TMDB_API_KEY", "from-env"),
            ("TMDB_BASE_URL", ""),
        ]);

        // Act
        config.apply_env(|key| env.get(key).map(|v| (*v).to_owned()));

        // Assert
        assert_eq!(config.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.base_url.as_deref(), Some("https://file.example/3/"));
        assert!(config.bearer_token.is_none());
    }

    #[test]
    fn test_client_builder_without_credentials_fails_to_build() {
        // Arrange
        let config = TmdbConfig::default();

        // Act
        let result = config.client_builder().unwrap().build();

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_client_builder_applies_settings() {
        // Arrange
        let config = TmdbConfig {
            api_key: Some(String::from("k")),
            base_url: Some(String::from("http://127.0.0.1:9999/3")),
            retry: RetryConfig {
                max_retries: 2,
                min_backoff_ms: 10,
                max_backoff_ms: 20,
            },
            ..TmdbConfig::default()
        };

        // Act
        let client = config.client_builder().unwrap().build().unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9999/3/");
        assert_eq!(client.retry_policy().max_retries(), 2);
        assert_eq!(client.retry_policy().max_backoff(), Duration::from_millis(20));
    }

    #[test]
    fn test_client_builder_rejects_bad_url() {
        // Arrange
        let config = TmdbConfig {
            api_key: Some(String::from("k")),
            base_url: Some(String::from("not a url")),
            ..TmdbConfig::default()
        };

        // Act
        let result = config.client_builder();

        // Assert
        assert!(result.is_err());
    }
}
