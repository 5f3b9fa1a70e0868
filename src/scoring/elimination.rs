//! Expected-elimination scoring for a single guess
//!
//! Given a guess and a candidate set, simulates the guess against every
//! candidate and measures how many candidates the observed outcome would rule
//! out on average, assuming every candidate is equally likely to be the answer.

use crate::core::{Outcome, Word};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Summary of how a guess partitions a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Expected number of candidates eliminated
    pub score: f64,
    /// Expected number of candidates left after the guess (`n - score`)
    pub expected_remaining: f64,
    /// Number of distinct outcomes
    pub partitions: usize,
    /// Size of the largest outcome class (worst case remaining)
    pub largest_partition: usize,
}

/// Count candidates per outcome the guess would produce
#[must_use]
pub fn group_by_outcome<W: Borrow<Word>>(guess: &Word, candidates: &[W]) -> FxHashMap<Outcome, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let outcome = Outcome::encode(guess, candidate.borrow());
        *counts.entry(outcome).or_insert(0) += 1;
    }

    counts
}

/// Expected candidates eliminated, from an outcome distribution
///
/// score = Σ p(o) × (n − count(o)), with p(o) = count(o) / n
#[must_use]
pub fn elimination_score<S: BuildHasher>(outcome_counts: &HashMap<Outcome, usize, S>) -> f64 {
    let total = outcome_counts.values().sum::<usize>();
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;

    outcome_counts
        .values()
        .map(|&count| {
            let prob = count as f64 / n;
            let eliminated = (total - count) as f64;
            prob * eliminated
        })
        .sum()
}

/// Score a guess against a candidate set
///
/// Returns the expected number of candidates eliminated. An empty candidate
/// set scores `0.0`; callers are expected to stop before scoring one.
///
/// # Examples
/// ```
/// use wordle_ranker::core::Word;
/// use wordle_ranker::scoring::score;
///
/// let candidates: Vec<Word> = ["mango", "melon", "macro"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// // Every candidate produces a different outcome: a perfect partition
/// let s = score(&Word::new("melon").unwrap(), &candidates);
/// assert!((s - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn score<W: Borrow<Word>>(guess: &Word, candidates: &[W]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    elimination_score(&group_by_outcome(guess, candidates))
}

/// Calculate score together with the partition shape
#[must_use]
pub fn calculate_metrics<W: Borrow<Word>>(guess: &Word, candidates: &[W]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            score: 0.0,
            expected_remaining: 0.0,
            partitions: 0,
            largest_partition: 0,
        };
    }

    let counts = group_by_outcome(guess, candidates);
    let score = elimination_score(&counts);

    GuessMetrics {
        score,
        expected_remaining: candidates.len() as f64 - score,
        partitions: counts.len(),
        largest_partition: counts.values().max().copied().unwrap_or(0),
    }
}
