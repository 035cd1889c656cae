//! Match statistics for wait times and rating dispersion
//!
//! Accumulators grow one sample set per formed match; summaries reduce them
//! at the end of a run.

pub mod accumulator;
pub mod summary;

// Re-export commonly used types
pub use accumulator::{StatsAccumulator, StatsCollector};
pub use summary::{MatchStats, QueueSummary};
