//! Candidate set construction
//!
//! The candidate set is always derived fresh from the full answer list and a
//! history; it is never narrowed in place.

use super::compatibility::is_possible;
use crate::core::{GuessRecord, Word};

/// Filter the answer list to the words consistent with every record
///
/// Order of `all_answers` is preserved. An empty result means no answer fits
/// the history, which callers must report rather than score.
///
/// # Examples
/// ```
/// use wordle_ranker::core::{GuessRecord, Word};
/// use wordle_ranker::filter::load_candidates;
///
/// let answers: Vec<Word> = ["irate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let history = [GuessRecord::parse("irate:-!!!!").unwrap()];
///
/// let candidates = load_candidates(&answers, &history);
/// assert_eq!(candidates.len(), 2);
/// ```
#[must_use]
pub fn load_candidates(all_answers: &[Word], history: &[GuessRecord]) -> Vec<Word> {
    let candidates: Vec<Word> = all_answers
        .iter()
        .filter(|&candidate| is_possible(candidate, history))
        .cloned()
        .collect();

    log::debug!(
        "{} of {} answers consistent with {} record(s)",
        candidates.len(),
        all_answers.len(),
        history.len()
    );

    candidates
}
