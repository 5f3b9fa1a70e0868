//! Outcome checks
//!
//! The built-in self-check replays a duplicate-letter case through the
//! compatibility filter before every run. `check_pair` encodes an arbitrary
//! guess against an answer and confirms the answer survives its own feedback.

use crate::core::{GuessRecord, RecordError, Word, WordError};
use crate::filter::is_possible;

/// Candidate replayed by the self-check
pub const SELF_CHECK_CANDIDATE: &str = "haloc";

/// Record replayed by the self-check; the second O is Absent after an Exact O
pub const SELF_CHECK_RECORD: &str = "taboo:-!-!-";

/// Outcome of replaying one record against one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub candidate: Word,
    pub record: GuessRecord,
    pub possible: bool,
}

/// Replay the built-in duplicate-letter case
///
/// # Errors
///
/// Returns `RecordError` if the built-in constants are malformed.
pub fn self_check() -> Result<CheckResult, RecordError> {
    let candidate = Word::new(SELF_CHECK_CANDIDATE)?;
    let record = GuessRecord::parse(SELF_CHECK_RECORD)?;
    let possible = is_possible(&candidate, std::slice::from_ref(&record));

    Ok(CheckResult {
        candidate,
        record,
        possible,
    })
}

/// Encode `guess` against `answer` and replay the result
///
/// # Errors
///
/// Returns `WordError` if either word is invalid.
///
/// # Examples
/// ```
/// use wordle_ranker::commands::check_pair;
///
/// let result = check_pair("arise", "radio").unwrap();
/// assert_eq!(result.record.outcome.to_string(), "+++--");
/// assert!(result.possible);
/// ```
pub fn check_pair(guess: &str, answer: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let record = GuessRecord::observe(&guess, &answer);
    let possible = is_possible(&answer, std::slice::from_ref(&record));

    Ok(CheckResult {
        candidate: answer,
        record,
        possible,
    })
}
