//! Rank-check outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use blogrank_search::OrganicResult;

/// Where a URL landed for its keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankStatus {
    /// Present in the organic results at this 1-based position.
    Found(u32),
    /// The lookup succeeded but no organic entry matched the URL.
    NotFound,
    /// The lookup itself failed.
    LookupError,
}

impl RankStatus {
    /// Returns `true` for [`RankStatus::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Renders as `#<position>`, `Not Found` or `Error`, the exported form.
impl fmt::Display for RankStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(position) => write!(f, "#{position}"),
            Self::NotFound => f.write_str("Not Found"),
            Self::LookupError => f.write_str("Error"),
        }
    }
}

/// The outcome for one keyword/URL pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankResult {
    /// The keyword that was searched.
    pub keyword: String,
    /// The URL that was looked for.
    pub url: String,
    /// Where the URL ranked.
    pub rank: RankStatus,
    /// Why the lookup failed, for [`RankStatus::LookupError`] only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Classify a successful lookup: the position of the first entry whose
/// `link` equals `url` exactly, or [`RankStatus::NotFound`].
///
/// No URL normalisation is applied; scheme, case and trailing-slash
/// differences do not match. A matching entry with position 0 is not a
/// valid rank and yields [`RankStatus::LookupError`].
pub fn find_rank(entries: &[OrganicResult], url: &str) -> RankStatus {
    match entries.iter().find(|entry| entry.link == url) {
        Some(entry) if entry.position == 0 => RankStatus::LookupError,
        Some(entry) => RankStatus::Found(entry.position),
        None => RankStatus::NotFound,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn display_matches_export_format() {
        assert_eq!(RankStatus::Found(3).to_string(), "#3");
        assert_eq!(RankStatus::NotFound.to_string(), "Not Found");
        assert_eq!(RankStatus::LookupError.to_string(), "Error");
    }

    #[test]
    fn find_rank_uses_reported_position() {
        let entries = vec![
            OrganicResult::new("https://a.com/", 1),
            OrganicResult::new("https://x.com/a", 3),
        ];
        assert_eq!(find_rank(&entries, "https://x.com/a"), RankStatus::Found(3));
    }

    #[test]
    fn find_rank_first_match_wins() {
        let entries = vec![
            OrganicResult::new("https://x.com/a", 2),
            OrganicResult::new("https://x.com/a", 7),
        ];
        assert_eq!(find_rank(&entries, "https://x.com/a"), RankStatus::Found(2));
    }

    #[test]
    fn find_rank_empty_results_is_not_found() {
        assert_eq!(find_rank(&[], "https://x.com/a"), RankStatus::NotFound);
    }

    #[test]
    fn find_rank_is_exact_string_match() {
        let entries = vec![OrganicResult::new("https://x.com/a/", 1)];
        assert_eq!(find_rank(&entries, "https://x.com/a"), RankStatus::NotFound);
        assert_eq!(find_rank(&entries, "http://x.com/a/"), RankStatus::NotFound);
        assert_eq!(find_rank(&entries, "https://X.com/a/"), RankStatus::NotFound);
    }

    #[test]
    fn find_rank_zero_position_is_lookup_error() {
        let entries = vec![OrganicResult::new("https://x.com/a", 0)];
        assert_eq!(find_rank(&entries, "https://x.com/a"), RankStatus::LookupError);
        assert_eq!(find_rank(&entries, "https://x.com/b"), RankStatus::NotFound);
    }

    #[test]
    fn is_found_only_for_found() {
        assert!(RankStatus::Found(1).is_found());
        assert!(!RankStatus::NotFound.is_found());
        assert!(!RankStatus::LookupError.is_found());
    }

    #[test]
    fn serialize_skips_absent_error() {
        let result = RankResult {
            keyword: "a".into(),
            url: "https://x.com/a".into(),
            rank: RankStatus::Found(3),
            error: None,
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert!(json.get("error").is_none());
        assert_eq!(json["rank"]["Found"], 3);
    }
}
