//! Sequential rank checker.
//!
//! Checks pairs strictly one at a time: each lookup is awaited before the
//! next is issued, with an optional randomised pause in between. A failed
//! lookup becomes a [`RankStatus::LookupError`] row and the batch carries
//! on.

use std::time::Duration;

use blogrank_search::OrganicSearch;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::input::KeywordUrlPair;
use crate::pipeline::state::BatchState;
use crate::progress::{ProgressCallback, ProgressEvent};
use crate::rank::{RankResult, RankStatus, find_rank};

/// Delay between consecutive lookups.
///
/// A random delay in `[min_delay_ms, max_delay_ms]` is slept before every
/// lookup except the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Lower bound of the pause, in milliseconds.
    pub min_delay_ms: u64,
    /// Upper bound of the pause, in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 200,
            max_delay_ms: 600,
        }
    }
}

impl PacingConfig {
    /// No pause between lookups.
    pub fn none() -> Self {
        Self {
            min_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Validate the delay range.
    ///
    /// # Errors
    ///
    /// Returns a message if `min_delay_ms > max_delay_ms`.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_delay_ms > self.max_delay_ms {
            return Err("pacing min_delay_ms must be <= max_delay_ms".into());
        }
        Ok(())
    }

    /// Pick the next pause. An inverted range is treated as its lower bound.
    fn next_delay(&self) -> Duration {
        if self.max_delay_ms <= self.min_delay_ms {
            return Duration::from_millis(self.min_delay_ms);
        }
        let ms = rand::thread_rng().gen_range(self.min_delay_ms..=self.max_delay_ms);
        Duration::from_millis(ms)
    }
}

/// Runs batches of rank checks against an [`OrganicSearch`] backend.
///
/// Holds no per-run state: each [`Self::run`] gets its own
/// [`BatchState`] and [`CancellationToken`], so a cancelled run does not
/// affect later runs on the same checker.
pub struct RankChecker<S> {
    search: S,
    pacing: PacingConfig,
}

impl<S: OrganicSearch> RankChecker<S> {
    /// Create a checker with no pacing delay.
    pub fn new(search: S) -> Self {
        Self {
            search,
            pacing: PacingConfig::none(),
        }
    }

    /// Set the delay between consecutive lookups.
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    /// Check every pair and return the results in input order.
    ///
    /// Convenience wrapper around [`Self::run`] without progress reporting
    /// or cancellation.
    pub async fn check(&self, pairs: Vec<KeywordUrlPair>) -> Vec<RankResult> {
        self.run(BatchState::new(pairs), None, &CancellationToken::new())
            .await
            .into_results()
    }

    /// Process `state` until every pair has a result or the run is
    /// cancelled, then hand the state back.
    ///
    /// `cancel` is checked before each lookup and during the pacing pause;
    /// results already recorded stay in the returned state. Pairs that
    /// already have a result are skipped, so a cancelled state can be passed
    /// back in (with a fresh token) to resume. Progress is emitted once per
    /// checked pair.
    pub async fn run(
        &self,
        mut state: BatchState,
        progress: Option<&ProgressCallback>,
        cancel: &CancellationToken,
    ) -> BatchState {
        let total = state.total();
        state.set_cancelled(false);

        if total == 0 {
            debug!("empty batch, nothing to check");
            return state;
        }

        let emit = |event: ProgressEvent| {
            if let Some(cb) = progress {
                cb(event);
            }
        };

        info!(total, backend = self.search.name(), "rank check started");
        emit(ProgressEvent::Started { total });

        let start = state.processed();
        for index in start..total {
            if cancel.is_cancelled() || !self.pause_before(index, start, cancel).await {
                info!(checked = state.processed(), total, "rank check cancelled");
                state.set_cancelled(true);
                emit(ProgressEvent::Cancelled {
                    checked: state.processed(),
                    total,
                });
                return state;
            }

            let pair = state.pairs()[index].clone();
            let result = self.check_pair(&pair).await;
            let rank = result.rank;
            let percent = state.record(result).unwrap_or(100);

            emit(ProgressEvent::PairChecked {
                index,
                keyword: pair.keyword().to_owned(),
                rank,
                percent,
            });
        }

        let found = state.results().iter().filter(|r| r.rank.is_found()).count();
        let errors = state
            .results()
            .iter()
            .filter(|r| r.rank == RankStatus::LookupError)
            .count();
        info!(total, found, errors, "rank check complete");
        emit(ProgressEvent::Completed { checked: total });

        state
    }

    /// Look up one pair and classify the outcome. Never fails.
    async fn check_pair(&self, pair: &KeywordUrlPair) -> RankResult {
        let (rank, error) = match self.search.organic(pair.keyword()).await {
            Ok(entries) => {
                let rank = find_rank(&entries, pair.url());
                debug!(
                    keyword = pair.keyword(),
                    entries = entries.len(),
                    %rank,
                    "pair checked"
                );
                if rank == RankStatus::LookupError {
                    warn!(keyword = pair.keyword(), "matching entry has position 0");
                    (rank, Some("matching entry has invalid position 0".to_owned()))
                } else {
                    (rank, None)
                }
            }
            Err(err) => {
                warn!(keyword = pair.keyword(), error = %err, "lookup failed");
                (RankStatus::LookupError, Some(err.to_string()))
            }
        };

        RankResult {
            keyword: pair.keyword().to_owned(),
            url: pair.url().to_owned(),
            rank,
            error,
        }
    }

    /// Sleep the pacing delay before every lookup but the first of this run.
    ///
    /// Returns `false` if cancelled while waiting.
    async fn pause_before(&self, index: usize, start: usize, cancel: &CancellationToken) -> bool {
        if index == start {
            return true;
        }
        let delay = self.pacing.next_delay();
        if delay.is_zero() {
            return true;
        }
        tokio::select! {
            () = cancel.cancelled() => false,
            () = tokio::time::sleep(delay) => true,
        }
    }
}
