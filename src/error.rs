//! Error types for blogrank.
//!
//! Per-pair lookup failures never surface here: the pipeline records them
//! as [`crate::RankStatus::LookupError`] and keeps going. These variants
//! cover the setup and output steps around a run.

/// Top-level error type for the rank checker.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    /// Configuration file could not be parsed or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The lookup backend could not be constructed.
    #[error("search error: {0}")]
    Search(#[from] blogrank_search::SearchError),

    /// Results could not be exported.
    #[error("export error: {0}")]
    Export(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, RankError>;
