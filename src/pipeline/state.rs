//! Per-run batch state.

use crate::input::KeywordUrlPair;
use crate::progress::progress_percent;
use crate::rank::RankResult;

/// Transient state for one rank-check run.
///
/// Holds the ordered pairs, the results accumulated so far (aligned with
/// the pairs by position) and the current progress percentage. The
/// pipeline takes it by value and hands it back when the run ends, so the
/// caller always owns the latest snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchState {
    pairs: Vec<KeywordUrlPair>,
    results: Vec<RankResult>,
    progress: Option<u8>,
    cancelled: bool,
}

impl BatchState {
    /// Start a fresh batch over `pairs`. Progress is unset.
    pub fn new(pairs: Vec<KeywordUrlPair>) -> Self {
        Self {
            pairs,
            results: Vec::new(),
            progress: None,
            cancelled: false,
        }
    }

    /// The pairs in this batch, in input order.
    pub fn pairs(&self) -> &[KeywordUrlPair] {
        &self.pairs
    }

    /// Results recorded so far, aligned with [`Self::pairs`].
    pub fn results(&self) -> &[RankResult] {
        &self.results
    }

    /// Current progress in `[0, 100]`, or `None` before the first pair
    /// finishes (and always for an empty batch).
    pub fn progress(&self) -> Option<u8> {
        self.progress
    }

    /// Number of pairs in the batch.
    pub fn total(&self) -> usize {
        self.pairs.len()
    }

    /// Number of pairs already checked.
    pub fn processed(&self) -> usize {
        self.results.len()
    }

    /// Whether every pair has a result.
    pub fn is_complete(&self) -> bool {
        self.results.len() == self.pairs.len()
    }

    /// Whether the last run over this state stopped on cancellation.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Consume the state, returning the results recorded so far.
    pub fn into_results(self) -> Vec<RankResult> {
        self.results
    }

    /// Append the next result and recompute progress.
    pub(crate) fn record(&mut self, result: RankResult) -> Option<u8> {
        debug_assert!(self.results.len() < self.pairs.len());
        self.results.push(result);
        self.progress = progress_percent(self.results.len(), self.pairs.len());
        self.progress
    }

    pub(crate) fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}
