//! Serper.dev backend — Google results over a JSON API.
//!
//! Sends `POST {base_url}/search` with the query in a JSON body and the
//! API key in the `X-API-KEY` header, then reads the `organic` array.

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::engine::OrganicSearch;
use crate::error::SearchError;
use crate::http;
use crate::types::OrganicResult;

/// Longest response body excerpt kept in an [`SearchError::Api`] message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Serper.dev organic search client.
///
/// Holds one HTTP client for its lifetime so a batch of lookups reuses
/// connections.
#[derive(Debug, Clone)]
pub struct SerperEngine {
    client: reqwest::Client,
    config: SearchConfig,
}

/// JSON request body.
#[derive(Debug, Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    num: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    gl: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hl: Option<&'a str>,
}

/// The part of the response we read. Everything else (knowledge graph,
/// people-also-ask, related searches) is ignored.
#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

impl SerperEngine {
    /// Validate `config` and build the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid config, or
    /// [`SearchError::Http`] if the client cannot be constructed.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let client = http::build_client(&config)?;
        Ok(Self { client, config })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl OrganicSearch for SerperEngine {
    async fn organic(&self, query: &str) -> Result<Vec<OrganicResult>, SearchError> {
        tracing::trace!(query, "Serper search");

        let body = SerperRequest {
            q: query,
            num: self.config.num_results,
            gl: self.config.country.as_deref(),
            hl: self.config.language.as_deref(),
        };

        let response = self
            .client
            .post(self.config.search_url())
            .header("X-API-KEY", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(SearchError::from_transport)?;

        let status = response.status();
        let text = response.text().await.map_err(SearchError::from_transport)?;

        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: http::truncate_body(&text, MAX_ERROR_BODY_CHARS),
            });
        }

        tracing::trace!(bytes = text.len(), "Serper response received");

        parse_serper_response(&text)
    }

    fn name(&self) -> &'static str {
        "serper"
    }
}

/// Parse a Serper JSON response body into organic results.
///
/// A body without an `organic` array is a query with zero results.
/// Positions are 1-based; an entry with position 0 is a parse error.
/// Extracted as a separate function for testability with canned JSON.
pub fn parse_serper_response(body: &str) -> Result<Vec<OrganicResult>, SearchError> {
    let parsed: SerperResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("invalid Serper response: {e}")))?;
    if let Some(entry) = parsed.organic.iter().find(|entry| entry.position == 0) {
        return Err(SearchError::Parse(format!(
            "organic entry {} has invalid position 0",
            entry.link
        )));
    }
    Ok(parsed.organic)
}
