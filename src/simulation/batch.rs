//! Batch runs for parameter sweeps
//!
//! Runs execute on the rayon pool, so at most one simulation per pool thread
//! is live at a time. Runs share only read-only inputs.

use rayon::prelude::*;
use tracing::info;

use crate::config::{RunOptions, SimulationParameters};
use crate::error::{Result, SimulationError};
use crate::report::SimulationReport;
use crate::simulation::driver::Simulation;
use crate::strategy::StrategyRegistry;

/// Execute `runs` independent simulations with seeds `base, base+1, ...`.
///
/// `base` is `options.seed`, or an entropy-derived seed when unset. Reports
/// are returned in seed order.
pub fn run_batch(
    params: &SimulationParameters,
    options: &RunOptions,
    strategies: &StrategyRegistry,
    runs: usize,
) -> Result<Vec<SimulationReport>> {
    if runs == 0 {
        return Err(SimulationError::InvalidRunOptions {
            reason: "runs must be at least 1".to_string(),
        }
        .into());
    }

    let base_seed = options.seed.unwrap_or_else(rand::random);
    info!(
        "Starting batch of {} runs from seed {} on {} threads",
        runs,
        base_seed,
        rayon::current_num_threads()
    );

    (0..runs)
        .into_par_iter()
        .map(|index| {
            let run_options = options.with_seed(base_seed.wrapping_add(index as u64));
            Simulation::new(params.clone(), run_options, strategies)?.run()
        })
        .collect()
}
