//! Depth-limited lookahead over the expected number of guesses
//!
//! The one-step elimination score ignores what happens after the next
//! outcome. This search plays each shortlisted guess, splits the candidates
//! by outcome and recursively picks the best follow-up for every class, so
//! guesses are compared by the expected number of guesses needed to finish.
//!
//! Cost model (uniform prior over candidates):
//! - cost(g, C) = 1 + Σ over non-solved outcomes o of p(o) × best(C_o)
//! - best(C) = 1 for one candidate, 1.5 for two, `2 − 1/|C|` once the depth
//!   limit is reached, otherwise the cheapest shortlisted guess.

use super::elimination::calculate_metrics;
use crate::core::{Outcome, Word};
use indicatif::ProgressBar;
use rayon::ThreadPool;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// Guesses whose expected remaining exceeds this share of the candidates are
/// not worth searching
const PRUNE_RATIO: f64 = 0.8;

/// Candidate sets at or below this size always try the candidates first
const SMALL_SET: usize = 10;

/// Search limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookaheadConfig {
    /// Number of follow-up levels searched below the top-level guess
    pub max_depth: usize,
    /// Maximum guesses searched at each level
    pub breadth: usize,
}

impl Default for LookaheadConfig {
    fn default() -> Self {
        Self {
            max_depth: 1,
            breadth: 100,
        }
    }
}

/// A top-level guess and the expected number of guesses to solve with it
#[derive(Debug, Clone, PartialEq)]
pub struct LookaheadResult {
    pub word: Word,
    pub expected_guesses: f64,
    pub is_candidate: bool,
}

/// Evaluate the shortlisted guesses and sort cheapest first
///
/// Ties prefer guesses that could be the answer, then word order. Only the
/// top level runs on the pool; deeper levels are sequential inside each task.
/// `progress` is advanced once per evaluated top-level guess.
#[must_use]
pub fn rank_lookahead(
    pool: &ThreadPool,
    guesses: &[Word],
    candidates: &[Word],
    config: LookaheadConfig,
    progress: &ProgressBar,
) -> Vec<LookaheadResult> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let guess_refs: Vec<&Word> = guesses.iter().collect();
    let candidate_refs: Vec<&Word> = candidates.iter().collect();
    let candidate_set: FxHashSet<&str> = candidates.iter().map(Word::text).collect();

    let mut results: Vec<LookaheadResult> = pool.install(|| {
        let shallow: Vec<(&Word, f64)> = guess_refs
            .par_iter()
            .map(|&guess| (guess, calculate_metrics(guess, &candidate_refs).expected_remaining))
            .collect();
        let shortlist = shortlist_from(shallow, &candidate_refs, config.breadth);
        progress.set_length(shortlist.len() as u64);
        log::info!("searching {} shortlisted guesses", shortlist.len());

        shortlist
            .par_iter()
            .map(|&guess| {
                let cost = expected_guesses(guess, &guess_refs, &candidate_refs, 0, config);
                progress.inc(1);
                LookaheadResult {
                    word: guess.clone(),
                    expected_guesses: cost,
                    is_candidate: candidate_set.contains(guess.text()),
                }
            })
            .collect()
    });

    results.sort_by(compare_results);
    results
}

/// The single cheapest guess, if any candidate remains
#[must_use]
pub fn best_guess(
    pool: &ThreadPool,
    guesses: &[Word],
    candidates: &[Word],
    config: LookaheadConfig,
) -> Option<LookaheadResult> {
    rank_lookahead(pool, guesses, candidates, config, &ProgressBar::hidden())
        .into_iter()
        .next()
}

fn compare_results(a: &LookaheadResult, b: &LookaheadResult) -> Ordering {
    a.expected_guesses
        .total_cmp(&b.expected_guesses)
        .then_with(|| b.is_candidate.cmp(&a.is_candidate))
        .then_with(|| a.word.cmp(&b.word))
}

/// Expected guesses to solve when `guess` is played next against `candidates`
#[must_use]
pub fn expected_guesses(
    guess: &Word,
    guesses: &[&Word],
    candidates: &[&Word],
    depth: usize,
    config: LookaheadConfig,
) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut classes: FxHashMap<Outcome, Vec<&Word>> = FxHashMap::default();
    for &candidate in candidates {
        classes
            .entry(Outcome::encode(guess, candidate))
            .or_default()
            .push(candidate);
    }

    let n = candidates.len() as f64;
    let follow_up: f64 = classes
        .iter()
        .filter(|(outcome, _)| !outcome.is_solved())
        .map(|(_, class)| {
            let prob = class.len() as f64 / n;
            prob * best_cost(guesses, class, depth + 1, config)
        })
        .sum();

    1.0 + follow_up
}

/// Cheapest expected cost of solving `candidates` from this level on
fn best_cost(guesses: &[&Word], candidates: &[&Word], depth: usize, config: LookaheadConfig) -> f64 {
    match candidates.len() {
        0 => 0.0,
        1 => 1.0,
        2 => 1.5,
        n if depth > config.max_depth => 2.0 - 1.0 / n as f64,
        _ => {
            let shallow: Vec<(&Word, f64)> = guesses
                .iter()
                .map(|&guess| (guess, calculate_metrics(guess, candidates).expected_remaining))
                .collect();

            shortlist_from(shallow, candidates, config.breadth)
                .into_iter()
                .map(|guess| expected_guesses(guess, guesses, candidates, depth, config))
                .min_by(f64::total_cmp)
                .unwrap_or(f64::INFINITY)
        }
    }
}

/// Pick the guesses worth searching
///
/// Small candidate sets put the candidates themselves first. The rest are
/// taken in order of expected remaining, dropping any that leave more than
/// `PRUNE_RATIO` of the candidates (the best one is always kept).
fn shortlist_from<'a>(
    mut shallow: Vec<(&'a Word, f64)>,
    candidates: &[&'a Word],
    breadth: usize,
) -> Vec<&'a Word> {
    shallow.sort_by(|(w1, r1), (w2, r2)| r1.total_cmp(r2).then_with(|| w1.cmp(w2)));

    let threshold = PRUNE_RATIO * candidates.len() as f64;
    let mut shortlist: Vec<&Word> = Vec::with_capacity(breadth);
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    if candidates.len() <= SMALL_SET {
        for &candidate in candidates {
            if seen.insert(candidate.text()) {
                shortlist.push(candidate);
            }
        }
    }

    for (i, (guess, remaining)) in shallow.into_iter().enumerate() {
        if i > 0 && remaining >= threshold {
            break;
        }
        if seen.insert(guess.text()) {
            shortlist.push(guess);
        }
    }

    shortlist.truncate(breadth.max(1));
    shortlist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::build_pool;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn guessing_the_only_candidate_takes_one_guess() {
        let candidates = words(&["crane"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let cost = expected_guesses(&candidates[0], &refs, &refs, 0, LookaheadConfig::default());
        assert!((cost - 1.0).abs() < 1e-9);
    }

    #[test]
    fn guessing_elsewhere_costs_one_more() {
        let candidates = words(&["crane"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let other = Word::new("zzzzz").unwrap();
        let cost = expected_guesses(&other, &refs, &refs, 0, LookaheadConfig::default());
        assert!((cost - 2.0).abs() < 1e-9);
    }

    #[test]
    fn perfect_partition_by_a_candidate() {
        let candidates = words(&["mango", "melon", "macro"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let cost = expected_guesses(&candidates[1], &refs, &refs, 0, LookaheadConfig::default());
        // Solved now with 1/3, otherwise exactly one follow-up guess
        assert!((cost - 5.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn ranks_candidates_ahead_of_uninformative_guesses() {
        let guesses = words(&["zzzzz", "melon", "mango", "macro"]);
        let candidates = words(&["mango", "melon", "macro"]);
        let pool = build_pool(2).unwrap();

        let ranked = rank_lookahead(
            &pool,
            &guesses,
            &candidates,
            LookaheadConfig::default(),
            &ProgressBar::hidden(),
        );

        assert_eq!(ranked[0].word.text(), "macro");
        assert!(ranked[0].is_candidate);
        assert!((ranked[0].expected_guesses - 5.0 / 3.0).abs() < 1e-9);
        for pair in ranked.windows(2) {
            assert!(pair[0].expected_guesses <= pair[1].expected_guesses);
        }
    }

    #[test]
    fn depth_limit_uses_leaf_estimate() {
        let candidates = words(&["aaaaa", "bbbbb", "ccccc", "ddddd"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let config = LookaheadConfig {
            max_depth: 0,
            breadth: 10,
        };
        let zzzzz = Word::new("zzzzz").unwrap();
        // One class of four at depth 1 > max_depth: 1 + (2 - 1/4)
        let cost = expected_guesses(&zzzzz, &refs, &refs, 0, config);
        assert!((cost - 2.75).abs() < 1e-9);
    }

    #[test]
    fn shortlist_prefers_small_candidate_sets_then_prunes() {
        let guesses = words(&["zzzzz", "melon", "aaaaa"]);
        let candidates = words(&["mango", "melon", "macro"]);
        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let shallow: Vec<(&Word, f64)> = guess_refs
            .iter()
            .map(|&g| (g, calculate_metrics(g, &candidate_refs).expected_remaining))
            .collect();
        let shortlist = shortlist_from(shallow, &candidate_refs, 10);
        let texts: Vec<&str> = shortlist.iter().map(|w| w.text()).collect();

        // Candidates first; AAAAA (5/3 expected remaining) survives, ZZZZZ (3) does not
        assert_eq!(texts, ["mango", "melon", "macro", "aaaaa"]);
    }

    #[test]
    fn best_guess_is_head_of_ranking() {
        let pool = build_pool(2).unwrap();
        let guesses = words(&["zzzzz", "melon", "mango", "macro"]);
        let candidates = words(&["mango", "melon", "macro"]);

        let best = best_guess(&pool, &guesses, &candidates, LookaheadConfig::default()).unwrap();
        assert_eq!(best.word.text(), "macro");
        assert!(best_guess(&pool, &guesses, &[], LookaheadConfig::default()).is_none());
    }

    #[test]
    fn empty_candidates_rank_nothing() {
        let pool = build_pool(1).unwrap();
        let ranked = rank_lookahead(
            &pool,
            &words(&["crane"]),
            &[],
            LookaheadConfig::default(),
            &ProgressBar::hidden(),
        );
        assert!(ranked.is_empty());
    }
}
