//! Summary statistics reported per queue type

use serde::{Deserialize, Serialize};

/// Reduced statistics for a queue that formed at least one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub matches: usize,
    pub players_matched: usize,
    pub mean_wait: f64,
    pub min_wait: f64,
    pub max_wait: f64,
    pub wait_std_dev: f64,
    pub mean_avg_rating: f64,
    pub min_avg_rating: f64,
    pub max_avg_rating: f64,
}

/// Outcome of summarizing one queue type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueueSummary {
    /// No match formed in this queue during the run
    NoData,
    Matches(MatchStats),
}

impl QueueSummary {
    pub fn has_data(&self) -> bool {
        matches!(self, QueueSummary::Matches(_))
    }

    pub fn stats(&self) -> Option<&MatchStats> {
        match self {
            QueueSummary::NoData => None,
            QueueSummary::Matches(stats) => Some(stats),
        }
    }

    pub fn match_count(&self) -> usize {
        self.stats().map(|s| s.matches).unwrap_or(0)
    }
}
