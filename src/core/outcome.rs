//! Wordle feedback outcome calculation and representation
//!
//! An outcome encodes the feedback for a guess using base-3 digits, one per
//! position:
//! - 0 = Absent (no further occurrence of the letter)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! The outcome is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.
//!
//! The textual form uses `!` for Exact, `+` for Present and `-` for Absent,
//! so `"!!---"` reads "first two letters exact, the rest absent".

use super::word::{ALPHABET, WORD_LENGTH, Word, letter_index};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter correct, correct position
    Exact,
    /// Letter in the answer, wrong position
    Present,
    /// No further occurrence of this letter in the answer
    Absent,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts `!`/`G`/`g`/🟩, `+`/`Y`/`y`/🟨 and `-`/`_`/`.`/⬜/⬛.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '!' | 'G' | 'g' | '🟩' => Some(Self::Exact),
            '+' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical textual symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => '!',
            Self::Present => '+',
            Self::Absent => '-',
        }
    }

    /// Exact or Present
    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Exact | Self::Present)
    }
}

/// Error returned when an outcome string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "outcome must have exactly {WORD_LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "invalid outcome symbol '{ch}' (expected '!', '+' or '-')")
            }
        }
    }
}

impl std::error::Error for OutcomeError {}

/// Feedback outcome for a Wordle guess
///
/// Represents the per-position feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible outcomes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Outcome(u8);

impl Outcome {
    /// All exact (the guess is the answer)
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct outcomes (3^5)
    pub const COUNT: usize = 243;

    /// Build an outcome from per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for fb in feedback {
            value += fb.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Get the raw outcome value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every position is Exact
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Feedback at every position, left to right
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LENGTH] {
        let mut val = self.0;
        let mut result = [Feedback::Absent; WORD_LENGTH];
        for slot in &mut result {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Compute the outcome when `guess` is played and `answer` is the target
    ///
    /// # Algorithm
    /// 1. Exact pass: mark positions where the letters agree and consume one
    ///    occurrence of that letter from the answer's letter budget
    /// 2. Left-to-right pass over the rest: Present while budget remains for
    ///    the letter, Absent otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::{Outcome, Word};
    ///
    /// let guess = Word::new("arise").unwrap();
    /// let answer = Word::new("radio").unwrap();
    /// assert_eq!(Outcome::encode(&guess, &answer).to_string(), "+++--");
    /// ```
    #[must_use]
    pub fn encode(guess: &Word, answer: &Word) -> Self {
        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut budget: [u8; ALPHABET] = answer.letter_counts();

        for (i, slot) in feedback.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *slot = Feedback::Exact;
                budget[letter_index(letter)] -= 1;
            }
        }

        for (i, slot) in feedback.iter_mut().enumerate() {
            if *slot == Feedback::Exact {
                continue;
            }
            let remaining = &mut budget[letter_index(guess.char_at(i))];
            if *remaining > 0 {
                *slot = Feedback::Present;
                *remaining -= 1;
            }
        }

        Self::from_feedback(feedback)
    }

    /// Parse an outcome string such as `"!+--!"`
    ///
    /// # Errors
    /// Returns `OutcomeError` if the string does not hold exactly five
    /// recognised feedback symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Outcome;
    ///
    /// let p1 = Outcome::parse("!+-!+").unwrap();
    /// let p2 = Outcome::parse("GY_GY").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, OutcomeError> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(OutcomeError::InvalidLength(symbols.len()));
        }

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        for (slot, &symbol) in feedback.iter_mut().zip(&symbols) {
            *slot = Feedback::from_symbol(symbol).ok_or(OutcomeError::InvalidSymbol(symbol))?;
        }
        Ok(Self::from_feedback(feedback))
    }

    /// Number of positions carrying the given feedback
    #[must_use]
    pub fn count(self, kind: Feedback) -> usize {
        self.feedback().iter().filter(|&&fb| fb == kind).count()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.feedback().iter().map(|fb| fb.symbol()).collect();
        write!(f, "{text}")
    }
}

impl std::str::FromStr for Outcome {
    type Err = OutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
