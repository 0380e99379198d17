//! Rank-check pipeline: one sequential lookup per pair, in input order.

pub mod checker;
pub mod state;

pub use checker::{PacingConfig, RankChecker};
pub use state::BatchState;
