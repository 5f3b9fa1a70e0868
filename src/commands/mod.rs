//! Command implementations

pub mod check;
pub mod deep;
pub mod rank;

pub use check::{CheckResult, check_pair, self_check};
pub use deep::{DeepConfig, DeepReport, run_deep};
pub use rank::{
    CandidateSummary, DEFAULT_HISTORY, RankConfig, RankReport, default_history, rank_allowed,
    summarize_candidates,
};
