//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod progress;

pub use display::{
    print_candidate_summary, print_check_result, print_deep_report, print_history,
    print_no_answers, print_rank_report, print_self_check,
};
pub use progress::scoring_progress;
