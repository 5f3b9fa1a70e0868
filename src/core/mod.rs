//! Core domain types for Wordle
//!
//! Words, feedback outcomes and guess records. Nothing in here depends on
//! the word lists or on any external crate.

mod history;
mod outcome;
mod word;

pub use history::{GuessRecord, RecordError, parse_history};
pub use outcome::{Feedback, Outcome, OutcomeError};
pub use word::{ALPHABET, WORD_LENGTH, Word, WordError};

pub(crate) use word::letter_index;
