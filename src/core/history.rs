//! Guess records and their textual form
//!
//! A record is written `guess:outcome`, e.g. `roate:+-++-`.

use super::outcome::{Outcome, OutcomeError};
use super::word::{Word, WordError};
use std::fmt;

/// A guess that was played together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    pub guess: Word,
    pub outcome: Outcome,
}

/// Error returned when a `guess:outcome` record cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    MissingSeparator(String),
    Word(WordError),
    Outcome(OutcomeError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(text) => {
                write!(f, "expected GUESS:OUTCOME, got '{text}'")
            }
            Self::Word(e) => write!(f, "invalid guess: {e}"),
            Self::Outcome(e) => write!(f, "invalid outcome: {e}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingSeparator(_) => None,
            Self::Word(e) => Some(e),
            Self::Outcome(e) => Some(e),
        }
    }
}

impl From<WordError> for RecordError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<OutcomeError> for RecordError {
    fn from(e: OutcomeError) -> Self {
        Self::Outcome(e)
    }
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Word, outcome: Outcome) -> Self {
        Self { guess, outcome }
    }

    /// Parse a record from its `guess:outcome` form
    ///
    /// # Errors
    /// Returns `RecordError` if the separator is missing or either half is
    /// malformed.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::GuessRecord;
    ///
    /// let record = GuessRecord::parse("roate:+-++-").unwrap();
    /// assert_eq!(record.guess.text(), "roate");
    /// assert_eq!(record.outcome.to_string(), "+-++-");
    /// ```
    pub fn parse(text: &str) -> Result<Self, RecordError> {
        let (guess, outcome) = text
            .split_once(':')
            .ok_or_else(|| RecordError::MissingSeparator(text.to_string()))?;
        Ok(Self::new(Word::new(guess.trim())?, Outcome::parse(outcome)?))
    }

    /// Record the real feedback `guess` would receive against `answer`
    #[must_use]
    pub fn observe(guess: &Word, answer: &Word) -> Self {
        Self::new(guess.clone(), Outcome::encode(guess, answer))
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guess, self.outcome)
    }
}

impl std::str::FromStr for GuessRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a sequence of `guess:outcome` records
///
/// # Errors
/// Returns the first `RecordError` encountered.
pub fn parse_history<'a, I>(entries: I) -> Result<Vec<GuessRecord>, RecordError>
where
    I: IntoIterator<Item = &'a str>,
{
    entries.into_iter().map(GuessRecord::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_record() {
        let record = GuessRecord::parse("TABOO:-!-!-").unwrap();
        assert_eq!(record.guess.text(), "taboo");
        assert_eq!(record.outcome, Outcome::parse("-!-!-").unwrap());
        assert_eq!(record.to_string(), "taboo:-!-!-");
    }

    #[test]
    fn parse_reports_each_failure() {
        assert!(matches!(
            GuessRecord::parse("roate+-++-"),
            Err(RecordError::MissingSeparator(_))
        ));
        assert!(matches!(
            GuessRecord::parse("roa:+-++-"),
            Err(RecordError::Word(WordError::InvalidLength(3)))
        ));
        assert!(matches!(
            GuessRecord::parse("roate:+-++"),
            Err(RecordError::Outcome(OutcomeError::InvalidLength(4)))
        ));
    }

    #[test]
    fn observe_uses_real_feedback() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("pause").unwrap();
        assert_eq!(GuessRecord::observe(&guess, &answer).to_string(), "crane:--+-!");
    }

    #[test]
    fn parse_history_keeps_order() {
        let history = parse_history(["roate:+-++-", "spyal:---++"]).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].guess.text(), "roate");
        assert_eq!(history[1].guess.text(), "spyal");

        assert!(parse_history(["roate:+-++-", "bogus"]).is_err());
    }
}
