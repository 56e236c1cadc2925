//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Feed paging behavior
    #[serde(default)]
    pub feed: FeedConfig,

    /// Local persistence settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        url::Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        if self.feed.batch_size == 0 {
            return Err(AppError::validation("feed.batch_size must be > 0"));
        }
        if self.storage.favorites_file.trim().is_empty() {
            return Err(AppError::validation("storage.favorites_file is empty"));
        }
        Ok(())
    }
}

/// Remote API and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the creature resource, without trailing id
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Feed paging behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Number of sequential fetch attempts per load-more request
    #[serde(default = "defaults::batch_size")]
    pub batch_size: usize,

    /// How many items before the end of the feed the next batch
    /// should be requested (0 = only at the very last item)
    #[serde(default = "defaults::prefetch_threshold")]
    pub prefetch_threshold: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            batch_size: defaults::batch_size(),
            prefetch_threshold: defaults::prefetch_threshold(),
        }
    }
}

/// Local persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File name of the favorites slot, relative to the storage directory
    #[serde(default = "defaults::favorites_file")]
    pub favorites_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            favorites_file: defaults::favorites_file(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn base_url() -> String {
        "https://pokeapi.co/api/v2/pokemon".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; pokefeed/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Feed defaults
    pub fn batch_size() -> usize {
        5
    }
    pub fn prefetch_threshold() -> usize {
        0
    }

    // Storage defaults
    pub fn favorites_file() -> String {
        "favorites.json".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.api.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_batch_size() {
        let mut config = Config::default();
        config.feed.batch_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unparseable_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: Config = toml::from_str("[feed]\nbatch_size = 10\n").unwrap();
        assert_eq!(config.feed.batch_size, 10);
        assert_eq!(config.feed.prefetch_threshold, 0);
        assert_eq!(config.api.timeout_secs, 30);
    }
}
