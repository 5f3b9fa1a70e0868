//! Batch ranking command
//!
//! Filters the answer list with the configured history, then scores every
//! allowed guess against what is left.

use crate::core::{GuessRecord, RecordError, Word, parse_history};
use crate::filter::load_candidates;
use crate::scoring::{DEFAULT_WORKERS, ScoredGuess, build_pool, rank_guesses};
use indicatif::ProgressBar;
use rayon::ThreadPoolBuildError;
use std::time::{Duration, Instant};

/// History used when none is supplied on the command line
pub const DEFAULT_HISTORY: &[&str] = &["roate:+-++-", "spyal:---++"];

/// Candidate sets this small are listed in full
pub const LIST_THRESHOLD: usize = 5;

/// Number of ranked guesses reported by default
pub const DEFAULT_TOP: usize = 10;

/// Parse the built-in history
///
/// # Errors
///
/// Returns `RecordError` if a built-in record is malformed.
pub fn default_history() -> Result<Vec<GuessRecord>, RecordError> {
    parse_history(DEFAULT_HISTORY.iter().copied())
}

/// Settings for one ranking run
///
/// The history is not part of the run; it is applied beforehand by
/// [`summarize_candidates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankConfig {
    pub top: usize,
    pub workers: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Answers still possible under a history
#[derive(Debug, Clone)]
pub struct CandidateSummary {
    pub candidates: Vec<Word>,
    pub total_answers: usize,
}

impl CandidateSummary {
    /// No answer is consistent with the history
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The full list when it is short enough to show
    #[must_use]
    pub fn listing(&self) -> Option<&[Word]> {
        (!self.candidates.is_empty() && self.candidates.len() <= LIST_THRESHOLD)
            .then_some(self.candidates.as_slice())
    }
}

/// Result of scoring the allowed guesses
#[derive(Debug, Clone)]
pub struct RankReport {
    pub top: Vec<ScoredGuess>,
    pub guesses_scored: usize,
    pub candidate_count: usize,
    pub workers: usize,
    pub duration: Duration,
}

/// Reduce the answer list to the candidates allowed by `history`
#[must_use]
pub fn summarize_candidates(answers: &[Word], history: &[GuessRecord]) -> CandidateSummary {
    CandidateSummary {
        candidates: load_candidates(answers, history),
        total_answers: answers.len(),
    }
}

/// Score every allowed guess against the candidates
///
/// # Errors
///
/// Returns an error if the worker pool cannot be created.
///
/// # Panics
///
/// Panics in debug builds if `candidates` is empty; check
/// [`CandidateSummary::is_exhausted`] first.
pub fn rank_allowed(
    candidates: &[Word],
    allowed: &[Word],
    config: &RankConfig,
    progress: &ProgressBar,
) -> Result<RankReport, ThreadPoolBuildError> {
    debug_assert!(!candidates.is_empty(), "scoring needs at least one candidate");

    let pool = build_pool(config.workers)?;
    log::info!(
        "scoring {} guesses against {} candidates on {} workers",
        allowed.len(),
        candidates.len(),
        pool.current_num_threads()
    );

    let start = Instant::now();
    let mut ranked = rank_guesses(&pool, allowed, candidates, progress);
    let duration = start.elapsed();
    progress.finish_and_clear();
    log::info!("scored {} guesses in {:.2?}", ranked.len(), duration);

    let guesses_scored = ranked.len();
    ranked.truncate(config.top);

    Ok(RankReport {
        top: ranked,
        guesses_scored,
        candidate_count: candidates.len(),
        workers: pool.current_num_threads(),
        duration,
    })
}
