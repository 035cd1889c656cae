//! Rating updates applied when games finish
//!
//! This module provides the rating calculator interface and the naive
//! fixed-delta implementation.

pub mod calculator;
pub mod naive_elo;

// Re-export commonly used types
pub use calculator::{MatchOutcome, RatingCalculator};
pub use naive_elo::NaiveEloCalculator;
