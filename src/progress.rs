//! Progress event types for a rank-check run.
//!
//! Provides callback-based progress reporting that decouples the pipeline
//! from presentation (CLI indicatif bar, or any other front end).

use crate::rank::RankStatus;

/// Progress events emitted while a batch is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A run with at least one pair has started.
    Started {
        /// Number of pairs in the batch.
        total: usize,
    },

    /// One pair has been checked.
    PairChecked {
        /// 0-based index of the pair in the batch.
        index: usize,
        /// The keyword that was searched.
        keyword: String,
        /// Its outcome.
        rank: RankStatus,
        /// `floor(processed * 100 / total)` after this pair.
        percent: u8,
    },

    /// Every pair has been checked.
    Completed {
        /// Number of pairs checked.
        checked: usize,
    },

    /// The run was cancelled before every pair was checked.
    Cancelled {
        /// Number of pairs checked before cancellation.
        checked: usize,
        /// Number of pairs in the batch.
        total: usize,
    },
}

/// Callback type for receiving progress events.
pub type ProgressCallback = Box<dyn Fn(ProgressEvent) + Send + Sync>;

/// Completion percentage after `processed` of `total` pairs.
///
/// Rounds down. Returns `None` for an empty batch.
pub fn progress_percent(processed: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let processed = processed.min(total);
    // processed <= total, so the quotient is at most 100.
    u8::try_from(processed * 100 / total).ok()
}
