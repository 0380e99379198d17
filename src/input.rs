//! Input normalisation: raw multi-line text into keyword/URL pairs.
//!
//! Each non-blank line is `keyword,url`. The line is split on the first
//! comma only, so a URL containing commas survives intact. Lines missing
//! either half are malformed and are dropped without an error.

use serde::{Deserialize, Serialize};

/// One keyword and the URL expected to rank for it.
///
/// Both fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordUrlPair {
    keyword: String,
    url: String,
}

impl KeywordUrlPair {
    /// Build a pair, trimming both fields.
    ///
    /// Returns `None` if either field is empty after trimming.
    pub fn new(keyword: &str, url: &str) -> Option<Self> {
        let keyword = keyword.trim();
        let url = url.trim();
        if keyword.is_empty() || url.is_empty() {
            return None;
        }
        Some(Self {
            keyword: keyword.to_owned(),
            url: url.to_owned(),
        })
    }

    /// The search query.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The URL to look for in the organic results.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A non-blank input line that could not be turned into a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the raw input.
    pub line_number: usize,
    /// The line as it appeared, trimmed.
    pub content: String,
}

/// Pairs plus the malformed lines that were dropped to produce them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    /// Valid pairs, in input order.
    pub pairs: Vec<KeywordUrlPair>,
    /// Non-blank lines that lacked a keyword or a URL.
    pub skipped: Vec<SkippedLine>,
}

/// Parse raw text into an ordered sequence of pairs.
///
/// Blank lines and malformed lines are dropped silently. An empty input
/// yields an empty sequence.
pub fn parse_pairs(raw: &str) -> Vec<KeywordUrlPair> {
    parse_pairs_with_report(raw).pairs
}

/// Parse raw text, also reporting which non-blank lines were dropped.
pub fn parse_pairs_with_report(raw: &str) -> ParsedInput {
    let mut parsed = ParsedInput::default();

    for (idx, line) in raw.split('\n').enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(pair) => parsed.pairs.push(pair),
            None => parsed.skipped.push(SkippedLine {
                line_number: idx + 1,
                content: line.to_owned(),
            }),
        }
    }

    parsed
}

fn parse_line(line: &str) -> Option<KeywordUrlPair> {
    let (keyword, url) = line.split_once(',').unwrap_or((line, ""));
    KeywordUrlPair::new(keyword, url)
}
