//! Parallel ranking of every allowed guess
//!
//! Scoring one guess is independent of every other, so the allowed list is
//! mapped over a fixed-size rayon pool. Workers only read the shared candidate
//! slice.

use super::elimination::calculate_metrics;
use crate::core::Word;
use indicatif::ProgressBar;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use rustc_hash::FxHashSet;

/// Default worker pool size
pub const DEFAULT_WORKERS: usize = 10;

/// A guess together with its expected-elimination score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
    /// Number of distinct outcomes the guess splits the candidates into
    pub partitions: usize,
    /// Candidates left in the worst case
    pub largest_partition: usize,
    /// Whether the guess could itself be the answer
    pub is_candidate: bool,
}

/// Build the worker pool used for scoring
///
/// # Errors
///
/// Returns an error if the operating system refuses to spawn the threads.
pub fn build_pool(workers: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .thread_name(|i| format!("scorer-{i}"))
        .build()
}

/// Score every guess against the candidates and sort best first
///
/// Ordering is by score descending, then by word ascending, so equal scores
/// come out in a deterministic order. `progress` is advanced once per guess.
///
/// # Examples
/// ```
/// use indicatif::ProgressBar;
/// use wordle_ranker::core::Word;
/// use wordle_ranker::scoring::{build_pool, rank_guesses};
///
/// let guesses = vec![Word::new("zzzzz").unwrap(), Word::new("melon").unwrap()];
/// let candidates: Vec<Word> = ["mango", "melon", "macro"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let pool = build_pool(2).unwrap();
/// let ranked = rank_guesses(&pool, &guesses, &candidates, &ProgressBar::hidden());
/// assert_eq!(ranked[0].word.text(), "melon");
/// ```
#[must_use]
pub fn rank_guesses(
    pool: &ThreadPool,
    guesses: &[Word],
    candidates: &[Word],
    progress: &ProgressBar,
) -> Vec<ScoredGuess> {
    let candidate_set: FxHashSet<&str> = candidates.iter().map(Word::text).collect();

    let mut ranked: Vec<ScoredGuess> = pool.install(|| {
        guesses
            .par_iter()
            .map(|guess| {
                let metrics = calculate_metrics(guess, candidates);
                let scored = ScoredGuess {
                    word: guess.clone(),
                    score: metrics.score,
                    partitions: metrics.partitions,
                    largest_partition: metrics.largest_partition,
                    is_candidate: candidate_set.contains(guess.text()),
                };
                progress.inc(1);
                scored
            })
            .collect()
    });

    sort_by_score(&mut ranked);
    ranked
}

/// Sort best score first, ties by word
pub fn sort_by_score(ranked: &mut [ScoredGuess]) {
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.word.cmp(&b.word))
    });
}
