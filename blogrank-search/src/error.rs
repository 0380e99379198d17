//! Error types for the blogrank-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. No API keys or sensitive data appear in
//! error messages.

/// Errors that can occur during an organic search lookup.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request did not complete within the configured timeout.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The search API answered with a non-success status code.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body or reason phrase, truncated for display.
        message: String,
    },

    /// The response body was not the JSON shape we expect.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Map a transport-level [`reqwest::Error`], keeping timeouts distinct.
    ///
    /// The request URL is stripped so query strings never end up in messages.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        let msg = err.without_url().to_string();
        if timed_out {
            Self::Timeout(msg)
        } else {
            Self::Http(msg)
        }
    }
}

/// Convenience type alias for blogrank-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
