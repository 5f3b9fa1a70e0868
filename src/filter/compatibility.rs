//! Outcome compatibility between a hypothetical answer and a guess history
//!
//! A candidate survives when replaying every record against it is consistent
//! position by position, and one letter count in the candidate satisfies the
//! letter-count evidence of all records at once.

use crate::core::{ALPHABET, Feedback, GuessRecord, Word, letter_index};

/// Letter-count evidence accumulated over a history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LetterEvidence {
    /// Largest Exact+Present count asserted for each letter by a single record
    max_positive: [u8; ALPHABET],
    /// Letters marked Absent by at least one record
    absent: [bool; ALPHABET],
}

impl LetterEvidence {
    const fn new() -> Self {
        Self {
            max_positive: [0; ALPHABET],
            absent: [false; ALPHABET],
        }
    }

    fn admits(&self, candidate: &Word) -> bool {
        let counts = candidate.letter_counts();
        (0..ALPHABET).all(|i| {
            let required = self.max_positive[i];
            counts[i] >= required && (!self.absent[i] || counts[i] <= required)
        })
    }
}

/// Decide whether `candidate` could be the answer given `history`
///
/// An Absent mark on a letter that the same history also marked Exact or
/// Present caps the candidate's count of that letter at the positive count,
/// rather than excluding the letter outright.
///
/// # Examples
/// ```
/// use wordle_ranker::core::{GuessRecord, Word};
/// use wordle_ranker::filter::is_possible;
///
/// let history = [GuessRecord::parse("taboo:-!-!-").unwrap()];
/// assert!(is_possible(&Word::new("wagon").unwrap(), &history));
/// assert!(!is_possible(&Word::new("taboo").unwrap(), &history));
/// ```
#[must_use]
pub fn is_possible(candidate: &Word, history: &[GuessRecord]) -> bool {
    let mut evidence = LetterEvidence::new();

    for record in history {
        let mut positive = [0u8; ALPHABET];
        let feedback = record.outcome.feedback();

        for (i, &fb) in feedback.iter().enumerate() {
            let letter = record.guess.char_at(i);
            let matches = letter == candidate.char_at(i);

            // An exact letter always shows as Exact
            if (fb == Feedback::Exact) != matches {
                return false;
            }

            let idx = letter_index(letter);
            if fb.is_positive() {
                positive[idx] += 1;
            } else {
                evidence.absent[idx] = true;
            }
        }

        for (max, count) in evidence.max_positive.iter_mut().zip(positive) {
            *max = (*max).max(count);
        }
    }

    evidence.admits(candidate)
}
