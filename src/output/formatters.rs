//! Formatting utilities for terminal output

use crate::core::{Feedback, Outcome, Word};

/// Format an outcome as emoji string
#[must_use]
pub fn outcome_to_emoji(outcome: Outcome) -> String {
    outcome
        .feedback()
        .iter()
        .map(|fb| match fb {
            Feedback::Absent => '⬜',
            Feedback::Present => '🟨',
            Feedback::Exact => '🟩',
        })
        .collect()
}

/// Create a bar string filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for an elimination score relative to the candidate count
///
/// A perfect partition eliminates `n - 1` candidates, so that is the full bar.
#[must_use]
pub fn score_bar(score: f64, candidate_count: usize, width: usize) -> String {
    let max = candidate_count.saturating_sub(1) as f64;
    create_progress_bar(score, max, width)
}

/// Join words into a quoted, comma separated list
#[must_use]
pub fn word_list(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| format!("'{w}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_to_emoji_all_absent() {
        let outcome = Outcome::parse("-----").unwrap();
        assert_eq!(outcome_to_emoji(outcome), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn outcome_to_emoji_mixed() {
        let outcome = Outcome::parse("!+-!+").unwrap();
        assert_eq!(outcome_to_emoji(outcome), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max_is_empty() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_bar_full_for_perfect_partition() {
        assert_eq!(score_bar(2.0, 3, 4), "████");
    }

    #[test]
    fn word_list_quotes_each_word() {
        let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
        assert_eq!(word_list(&words), "'crane', 'slate'");
    }
}
