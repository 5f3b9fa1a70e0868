//! Candidate filtering against a guess history

pub mod candidates;
pub mod compatibility;

pub use candidates::load_candidates;
pub use compatibility::is_possible;
