//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the API endpoint and credentials, the locale
//! sent with each query, and request behaviour.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Default Serper.dev API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://google.serper.dev";

/// Configuration for organic search lookups.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour. The API key is never printed by
/// the [`Debug`] implementation.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Serper.dev API key, sent as the `X-API-KEY` header.
    pub api_key: String,
    /// API base URL. The `/search` path is appended.
    pub base_url: String,
    /// Number of organic results to request per query.
    pub num_results: u32,
    /// Two-letter country code (`gl`), if any.
    pub country: Option<String>,
    /// Interface language code (`hl`), if any.
    pub language: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, a crate-versioned default is used.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            num_results: 10,
            country: None,
            language: None,
            timeout_seconds: 10,
            user_agent: None,
        }
    }
}

impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("num_results", &self.num_results)
            .field("country", &self.country)
            .field("language", &self.language)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl SearchConfig {
    /// Create a config with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set a custom base URL (used to point tests at a mock server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_seconds = secs;
        self
    }

    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `api_key` must not be blank
    /// - `num_results` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `base_url` must be an absolute http(s) URL
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.api_key.trim().is_empty() {
            return Err(SearchError::Config("api_key must not be empty".into()));
        }
        if self.num_results == 0 {
            return Err(SearchError::Config(
                "num_results must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| SearchError::Config(format!("invalid base_url: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SearchError::Config(
                "base_url must use http or https".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.num_results, 10);
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.country.is_none());
        assert!(config.language.is_none());
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn default_config_fails_without_api_key() {
        let err = SearchConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn valid_config_passes_validation() {
        let config = SearchConfig::new("test-key");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_api_key_rejected() {
        let err = SearchConfig::new("   ").validate().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn zero_num_results_rejected() {
        let config = SearchConfig {
            num_results: 0,
            ..SearchConfig::new("k")
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("num_results"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SearchConfig::new("k").with_timeout_secs(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn malformed_base_url_rejected() {
        let config = SearchConfig::new("k").with_base_url("not a url");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let config = SearchConfig::new("k").with_base_url("ftp://example.com");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn search_url_handles_trailing_slash() {
        let a = SearchConfig::new("k").with_base_url("http://127.0.0.1:8080/");
        let b = SearchConfig::new("k").with_base_url("http://127.0.0.1:8080");
        assert_eq!(a.search_url(), "http://127.0.0.1:8080/search");
        assert_eq!(a.search_url(), b.search_url());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = SearchConfig::new("super-secret-key");
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn deserialize_partial_uses_defaults() {
        let json = r#"{"api_key":"abc","country":"us"}"#;
        let config: SearchConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.country.as_deref(), Some("us"));
        assert_eq!(config.num_results, 10);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
