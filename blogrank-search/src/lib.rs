//! # blogrank-search
//!
//! Organic search lookups for blogrank.
//!
//! This crate answers one question: for a query, which URLs appear in the
//! organic (unpaid) results, and at which 1-based position. It is the lookup
//! capability the rank-check pipeline depends on, expressed as the
//! [`OrganicSearch`] trait, with a Serper.dev JSON API backend.
//!
//! ## Design
//!
//! - One request per query; no fan-out, no retries, no caching
//! - A query with zero organic results is a successful, empty lookup
//! - Non-success status codes and malformed bodies are errors the caller
//!   can isolate per query
//!
//! ## Security
//!
//! - The API key is sent only as a request header and is redacted from
//!   `Debug` output
//! - Request URLs are stripped from transport error messages
//! - Search queries are logged only at trace level

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod http;
pub mod types;

pub use config::SearchConfig;
pub use engine::OrganicSearch;
pub use engines::SerperEngine;
pub use error::{Result, SearchError};
pub use types::OrganicResult;

/// Look up the organic results for a single query.
///
/// Builds a one-off [`SerperEngine`] from `config`. For batches, build the
/// engine once and call [`OrganicSearch::organic`] so the HTTP client is
/// reused.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid, otherwise any
/// error from [`SerperEngine`]'s lookup.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> blogrank_search::Result<()> {
/// let config = blogrank_search::SearchConfig::new("your-api-key");
/// let results = blogrank_search::search("rust programming", &config).await?;
/// for result in &results {
///     println!("#{} {}", result.position, result.link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<OrganicResult>> {
    let engine = SerperEngine::new(config.clone())?;
    engine.organic(query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_missing_api_key() {
        let result = search("test", &SearchConfig::default()).await;
        assert!(result.unwrap_err().to_string().contains("api_key"));
    }

    #[tokio::test]
    async fn search_validates_config_zero_num_results() {
        let config = SearchConfig {
            num_results: 0,
            ..SearchConfig::new("k")
        };
        let result = search("test", &config).await;
        assert!(result.unwrap_err().to_string().contains("num_results"));
    }

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = SearchConfig::new("k").with_timeout_secs(0);
        let result = search("test", &config).await;
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }
}
