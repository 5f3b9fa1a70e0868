//! Word lists for Wordle solving
//!
//! Both lists are read once at start-up and then passed around as plain
//! slices.

pub mod loader;

pub use loader::{LoadError, load_from_file};

/// Default path of the answer list
pub const DEFAULT_ANSWERS_PATH: &str = "wordle_answers.txt";

/// Default path of the allowed-guess list
pub const DEFAULT_ALLOWED_PATH: &str = "wordle_allowed_words.txt";
