//! blogrank: bulk organic rank checking for keyword/URL pairs.
//!
//! Given lines of `keyword,url`, this crate looks up each keyword's organic
//! search results and reports where (if anywhere) the URL ranks.
//!
//! # Architecture
//!
//! - **Input**: raw text is normalised into ordered [`KeywordUrlPair`]s;
//!   malformed lines are dropped
//! - **Pipeline**: [`RankChecker`] performs one lookup per pair, strictly in
//!   order, turning failures into [`RankStatus::LookupError`] rows
//! - **Progress**: a [`ProgressCallback`] receives one update per pair
//! - **Export**: results render as the `Keyword,Blog URL,Organic Rank` CSV
//!
//! Lookups go through the [`blogrank_search::OrganicSearch`] trait, so the
//! pipeline is independent of the search API behind it.

pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod pipeline;
pub mod progress;
pub mod rank;

pub use config::AppConfig;
pub use error::{RankError, Result};
pub use input::{KeywordUrlPair, ParsedInput, parse_pairs, parse_pairs_with_report};
pub use pipeline::{BatchState, PacingConfig, RankChecker};
pub use progress::{ProgressCallback, ProgressEvent};
pub use rank::{RankResult, RankStatus};
