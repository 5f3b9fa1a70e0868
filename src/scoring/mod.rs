//! Guess scoring
//!
//! One-step expected elimination, the parallel ranking built on it, and a
//! depth-limited lookahead over expected guess counts.

pub mod elimination;
pub mod lookahead;
pub mod ranking;

pub use elimination::{GuessMetrics, calculate_metrics, score};
pub use lookahead::{LookaheadConfig, LookaheadResult, best_guess, rank_lookahead};
pub use ranking::{DEFAULT_WORKERS, ScoredGuess, build_pool, rank_guesses};
