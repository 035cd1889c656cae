//! Per-queue accumulation of match statistics

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::stats::summary::{MatchStats, QueueSummary};
use crate::types::QueueType;

/// Raw samples collected for one queue type as matches form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsAccumulator {
    /// One entry per matched player
    pub wait_times: Vec<f64>,
    /// One entry per formed match: the pre-game mean rating of its players
    pub avg_ratings: Vec<f64>,
    /// One entry per formed match: its participant count
    pub match_sizes: Vec<usize>,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a formed match
    pub fn record_match(&mut self, wait_times: &[f64], avg_rating: f64) {
        self.wait_times.extend_from_slice(wait_times);
        self.avg_ratings.push(avg_rating);
        self.match_sizes.push(wait_times.len());
    }

    pub fn match_count(&self) -> usize {
        self.avg_ratings.len()
    }

    /// Reduce the samples to summary statistics.
    ///
    /// Does not consume or alter the samples.
    pub fn summarize(&self) -> QueueSummary {
        if self.avg_ratings.is_empty() || self.wait_times.is_empty() {
            return QueueSummary::NoData;
        }

        let waits = Moments::of(&self.wait_times);
        let ratings = Moments::of(&self.avg_ratings);

        QueueSummary::Matches(MatchStats {
            matches: self.avg_ratings.len(),
            players_matched: self.wait_times.len(),
            mean_wait: waits.mean,
            min_wait: waits.min,
            max_wait: waits.max,
            wait_std_dev: waits.std_dev,
            mean_avg_rating: ratings.mean,
            min_avg_rating: ratings.min,
            max_avg_rating: ratings.max,
        })
    }
}

/// Mean, spread and extremes of a non-empty sample
struct Moments {
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
}

impl Moments {
    fn of(samples: &[f64]) -> Self {
        let count = samples.len() as f64;
        let sum: f64 = samples.iter().sum();
        let sum_squared: f64 = samples.iter().map(|s| s * s).sum();
        let mean = sum / count;
        let variance = (sum_squared / count) - (mean * mean);

        Self {
            mean,
            std_dev: variance.max(0.0).sqrt(),
            min: samples.iter().copied().fold(f64::INFINITY, f64::min),
            max: samples.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// One accumulator per queue type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsCollector {
    accumulators: BTreeMap<QueueType, StatsAccumulator>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self {
            accumulators: QueueType::ALL
                .iter()
                .map(|qt| (*qt, StatsAccumulator::new()))
                .collect(),
        }
    }

    pub fn accumulator(&self, queue_type: QueueType) -> Option<&StatsAccumulator> {
        self.accumulators.get(&queue_type)
    }

    pub fn record_match(&mut self, queue_type: QueueType, wait_times: &[f64], avg_rating: f64) {
        self.accumulators
            .entry(queue_type)
            .or_default()
            .record_match(wait_times, avg_rating);
    }

    pub fn summarize(&self, queue_type: QueueType) -> QueueSummary {
        self.accumulators
            .get(&queue_type)
            .map(StatsAccumulator::summarize)
            .unwrap_or(QueueSummary::NoData)
    }

    /// Summaries for every queue type, in reporting order
    pub fn summarize_all(&self) -> BTreeMap<QueueType, QueueSummary> {
        QueueType::ALL
            .iter()
            .map(|qt| (*qt, self.summarize(*qt)))
            .collect()
    }
}
