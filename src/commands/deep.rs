//! Lookahead command
//!
//! Ranks guesses by the expected number of guesses needed to finish, using a
//! depth-limited search over the best one-step guesses.

use super::rank::DEFAULT_TOP;
use crate::core::Word;
use crate::scoring::{
    DEFAULT_WORKERS, LookaheadConfig, LookaheadResult, build_pool, rank_lookahead,
};
use indicatif::ProgressBar;
use rayon::ThreadPoolBuildError;
use std::time::{Duration, Instant};

/// Settings for one lookahead run
#[derive(Debug, Clone, Copy)]
pub struct DeepConfig {
    pub lookahead: LookaheadConfig,
    pub top: usize,
    pub workers: usize,
}

impl Default for DeepConfig {
    fn default() -> Self {
        Self {
            lookahead: LookaheadConfig::default(),
            top: DEFAULT_TOP,
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Result of a lookahead run
#[derive(Debug, Clone)]
pub struct DeepReport {
    pub top: Vec<LookaheadResult>,
    pub searched: usize,
    pub candidate_count: usize,
    pub config: LookaheadConfig,
    pub duration: Duration,
}

/// Search the allowed guesses against the candidates
///
/// # Errors
///
/// Returns an error if the worker pool cannot be created.
pub fn run_deep(
    candidates: &[Word],
    allowed: &[Word],
    config: DeepConfig,
    progress: &ProgressBar,
) -> Result<DeepReport, ThreadPoolBuildError> {
    let pool = build_pool(config.workers)?;
    log::info!(
        "lookahead depth {} breadth {} over {} candidates",
        config.lookahead.max_depth,
        config.lookahead.breadth,
        candidates.len()
    );

    let start = Instant::now();
    let mut ranked = rank_lookahead(&pool, allowed, candidates, config.lookahead, progress);
    let duration = start.elapsed();
    progress.finish_and_clear();

    let searched = ranked.len();
    ranked.truncate(config.top);

    Ok(DeepReport {
        top: ranked,
        searched,
        candidate_count: candidates.len(),
        config: config.lookahead,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn deep_report_prefers_candidates_that_split() {
        let candidates = words_from_slice(&["mango", "melon", "macro"]);
        let allowed = words_from_slice(&["zzzzz", "melon", "mango", "macro"]);
        let config = DeepConfig {
            top: 1,
            workers: 2,
            ..DeepConfig::default()
        };

        let report = run_deep(&candidates, &allowed, config, &ProgressBar::hidden()).unwrap();

        assert_eq!(report.searched, 3);
        assert_eq!(report.candidate_count, 3);
        assert_eq!(report.top.len(), 1);
        assert_eq!(report.top[0].word.text(), "macro");
    }
}
