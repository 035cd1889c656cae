//! Run reports: CSV log lines, console output and JSON

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, SimulationError};
use crate::simulation::{Census, RunState};
use crate::stats::QueueSummary;
use crate::types::QueueType;

/// Final summary of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub elo_strategy: String,
    pub mm_strategy: String,
    pub sim_time: f64,
    pub num_players: usize,
    /// Seed the run was executed with, for replay
    pub seed: u64,
    pub end_state: RunState,
    pub events_processed: u64,
    /// Matches formed across all queues
    pub matches_formed: u64,
    /// Games that finished and were resolved before the horizon
    pub games_resolved: u64,
    /// Sum of games played over all players
    pub player_games: u64,
    pub census: Census,
    pub summaries: BTreeMap<QueueType, QueueSummary>,
}

impl SimulationReport {
    pub fn summary(&self, queue_type: QueueType) -> &QueueSummary {
        self.summaries
            .get(&queue_type)
            .unwrap_or(&QueueSummary::NoData)
    }

    /// CSV lines, one per queue type that formed at least one match:
    /// `elo_strategy,mm_strategy,queue_type,matches,mean_wait,min_wait,max_wait,
    /// mean_avg_rating,min_avg_rating,max_avg_rating,sim_time`
    ///
    /// `sim_time` always carries a fractional part (`3600.0`), matching
    /// existing log files.
    pub fn log_lines(&self) -> Vec<String> {
        self.summaries
            .iter()
            .filter_map(|(queue_type, summary)| {
                summary.stats().map(|s| {
                    format!(
                        "{},{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:?}",
                        self.elo_strategy,
                        self.mm_strategy,
                        queue_type,
                        s.matches,
                        s.mean_wait,
                        s.min_wait,
                        s.max_wait,
                        s.mean_avg_rating,
                        s.min_avg_rating,
                        s.max_avg_rating,
                        self.sim_time
                    )
                })
            })
            .collect()
    }

    /// Append the CSV lines to `path`, creating the file if needed
    pub fn append_to_log(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let write_error = |e: std::io::Error| SimulationError::ReportWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(write_error)?;
        for line in self.log_lines() {
            writeln!(file, "{}", line).map_err(write_error)?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Simulation Results:")?;
        writeln!(
            f,
            "  Strategies: elo={}, mm={} | Seed: {} | Horizon: {}s",
            self.elo_strategy, self.mm_strategy, self.seed, self.sim_time
        )?;
        writeln!(
            f,
            "  Ended: {} after {} events",
            self.end_state, self.events_processed
        )?;
        writeln!(
            f,
            "  Games: {} formed, {} resolved, {} player-games",
            self.matches_formed, self.games_resolved, self.player_games
        )?;

        for (queue_type, summary) in &self.summaries {
            match summary {
                QueueSummary::Matches(s) => {
                    writeln!(f)?;
                    writeln!(f, "Queue: {}", queue_type)?;
                    writeln!(f, "  Matches: {}", s.matches)?;
                    writeln!(
                        f,
                        "  Wait Time (sec): Mean = {:.2}, Min = {:.2}, Max = {:.2}, StdDev = {:.2}",
                        s.mean_wait, s.min_wait, s.max_wait, s.wait_std_dev
                    )?;
                    writeln!(
                        f,
                        "  Average Rating: Mean = {:.2}, Min = {:.2}, Max = {:.2}",
                        s.mean_avg_rating, s.min_avg_rating, s.max_avg_rating
                    )?;
                }
                QueueSummary::NoData => {
                    writeln!(f)?;
                    writeln!(f, "Queue: {} - No matches formed.", queue_type)?;
                }
            }
        }
        Ok(())
    }
}
