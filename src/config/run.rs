//! Per-run invocation options
//!
//! Supplied by the command line (or a programmatic caller) and separate from
//! the simulation parameters file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, SimulationError};

/// Options describing a single simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Total simulated time in seconds
    pub sim_time: f64,
    /// Number of synthetic players
    pub num_players: usize,
    /// Name of the rating-update strategy
    pub elo_strategy: String,
    /// Name of the matchmaking strategy
    pub mm_strategy: String,
    /// Seed for reproducible runs; drawn from entropy when absent
    pub seed: Option<u64>,
    /// File that CSV stats lines are appended to
    pub log_file: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            sim_time: 3600.0,
            num_players: 5000,
            elo_strategy: "naive".to_string(),
            mm_strategy: "naive".to_string(),
            seed: None,
            log_file: PathBuf::from("matchmaking_stats.log"),
        }
    }
}

impl RunOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.sim_time.is_finite() || self.sim_time < 0.0 {
            return Err(SimulationError::InvalidRunOptions {
                reason: format!(
                    "sim_time must be a finite, non-negative number (got {})",
                    self.sim_time
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Same options with a different seed, used for batch runs
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RunOptions::default();
        assert_eq!(options.sim_time, 3600.0);
        assert_eq!(options.num_players, 5000);
        assert_eq!(options.elo_strategy, "naive");
        assert_eq!(options.mm_strategy, "naive");
        assert!(options.seed.is_none());
        options.validate().unwrap();
    }

    #[test]
    fn test_invalid_sim_time() {
        for sim_time in [-1.0, f64::NAN, f64::INFINITY] {
            let options = RunOptions {
                sim_time,
                ..RunOptions::default()
            };
            assert!(options.validate().is_err());
        }
    }

    #[test]
    fn test_zero_sim_time_allowed() {
        let options = RunOptions {
            sim_time: 0.0,
            ..RunOptions::default()
        };
        options.validate().unwrap();
    }

    #[test]
    fn test_with_seed() {
        let options = RunOptions::default().with_seed(17);
        assert_eq!(options.seed, Some(17));
        assert_eq!(options.num_players, 5000);
    }
}
