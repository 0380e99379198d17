//! Core types for organic search results.

use serde::{Deserialize, Serialize};

/// A single organic (unpaid) entry from a search engine results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganicResult {
    /// The title of the result page.
    #[serde(default)]
    pub title: String,
    /// The URL of the result page, exactly as reported by the API.
    pub link: String,
    /// A text snippet summarising the page content.
    #[serde(default)]
    pub snippet: String,
    /// 1-based rank within the organic results.
    pub position: u32,
}

impl OrganicResult {
    /// Build a result with only the fields rank checking needs.
    pub fn new(link: impl Into<String>, position: u32) -> Self {
        Self {
            title: String::new(),
            link: link.into(),
            snippet: String::new(),
            position,
        }
    }
}
