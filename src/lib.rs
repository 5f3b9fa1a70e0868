//! Wordle Ranker
//!
//! Filters the Wordle answer list against the guesses played so far and ranks
//! every allowed guess by the expected number of candidates it eliminates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ranker::core::{GuessRecord, Word};
//! use wordle_ranker::filter::load_candidates;
//! use wordle_ranker::scoring::score;
//!
//! let answers: Vec<Word> = ["mango", "melon", "macro", "pause"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let history = [GuessRecord::parse("mauls:!!---").unwrap()];
//!
//! let candidates = load_candidates(&answers, &history);
//! assert_eq!(candidates.len(), 2);
//!
//! let s = score(&Word::new("melon").unwrap(), &candidates);
//! assert!((s - 1.0).abs() < 1e-9);
//! ```

// Core domain types
pub mod core;

// Candidate filtering
pub mod filter;

// Guess scoring
pub mod scoring;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
