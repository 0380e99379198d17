//! Configuration types for the rank checker.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use blogrank_search::SearchConfig;

use crate::pipeline::PacingConfig;

/// Environment variable that supplies (and overrides) the search API key.
pub const API_KEY_ENV: &str = "SERPER_API_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search API settings.
    pub search: SearchConfig,
    /// Delay between consecutive lookups.
    pub pacing: PacingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::RankError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::RankError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/blogrank/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("blogrank").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("blogrank")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/blogrank-config/config.toml")
        }
    }

    /// Replace the API key with `key` when it is present and non-blank.
    pub fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.search.api_key = key.trim().to_owned();
        }
    }

    /// Apply [`API_KEY_ENV`] from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_api_key(std::env::var(API_KEY_ENV).ok());
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::RankError::Config`] naming the first invalid field.
    pub fn validate(&self) -> crate::error::Result<()> {
        self.search.validate().map_err(|e| match e {
            blogrank_search::SearchError::Config(msg) => crate::error::RankError::Config(msg),
            other => other.into(),
        })?;
        self.pacing
            .validate()
            .map_err(crate::error::RankError::Config)
    }
}
