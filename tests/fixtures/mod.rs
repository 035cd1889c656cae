//! Test fixtures and mock implementations for integration testing

#![allow(dead_code)]

use matchmaking_sim::config::{RunOptions, SimulationParameters};
use matchmaking_sim::error::Result;
use matchmaking_sim::matchmaking::NaiveMatchmaker;
use matchmaking_sim::rating::{MatchOutcome, NaiveEloCalculator, RatingCalculator};
use matchmaking_sim::report::SimulationReport;
use matchmaking_sim::rng::SimulationRng;
use matchmaking_sim::simulation::Simulation;
use matchmaking_sim::strategy::StrategyRegistry;
use matchmaking_sim::types::{PlayerId, QueueType};
use std::sync::{Arc, Mutex};

/// One resolved game as seen by the recording calculator
#[derive(Debug, Clone)]
pub struct RecordedGame {
    pub queue_type: QueueType,
    pub roster: Vec<(PlayerId, f64)>,
    pub outcome: MatchOutcome,
}

/// Rating calculator that delegates to the naive one and records every call
#[derive(Debug, Default, Clone)]
pub struct RecordingRatingCalculator {
    inner: NaiveEloCalculator,
    games: Arc<Mutex<Vec<RecordedGame>>>,
}

impl RecordingRatingCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded games (for testing)
    pub fn games(&self) -> Vec<RecordedGame> {
        self.games
            .lock()
            .map(|games| games.clone())
            .unwrap_or_default()
    }
}

impl RatingCalculator for RecordingRatingCalculator {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn initial_rating(&self, rng: &mut SimulationRng) -> Result<f64> {
        self.inner.initial_rating(rng)
    }

    fn calculate_outcome(
        &self,
        queue_type: QueueType,
        players: &[(PlayerId, f64)],
        params: &SimulationParameters,
        rng: &mut SimulationRng,
    ) -> Result<MatchOutcome> {
        let outcome = self
            .inner
            .calculate_outcome(queue_type, players, params, rng)?;
        if let Ok(mut games) = self.games.lock() {
            games.push(RecordedGame {
                queue_type,
                roster: players.to_vec(),
                outcome: outcome.clone(),
            });
        }
        Ok(outcome)
    }
}

pub fn options(num_players: usize, sim_time: f64, seed: u64) -> RunOptions {
    RunOptions {
        sim_time,
        num_players,
        seed: Some(seed),
        ..RunOptions::default()
    }
}

/// Build a simulation with the default strategies
pub fn build_simulation(
    params: SimulationParameters,
    num_players: usize,
    sim_time: f64,
    seed: u64,
) -> Simulation {
    Simulation::new(
        params,
        options(num_players, sim_time, seed),
        &StrategyRegistry::with_defaults(),
    )
    .unwrap()
}

/// Run a simulation to completion, returning it along with its report
pub fn run_simulation(
    params: SimulationParameters,
    num_players: usize,
    sim_time: f64,
    seed: u64,
) -> (Simulation, SimulationReport) {
    let mut simulation = build_simulation(params, num_players, sim_time, seed);
    let report = simulation.run().unwrap();
    (simulation, report)
}

/// Run with a recording calculator so individual outcomes can be inspected
pub fn run_recorded(
    params: SimulationParameters,
    num_players: usize,
    sim_time: f64,
    seed: u64,
) -> (SimulationReport, Vec<RecordedGame>) {
    let calculator = RecordingRatingCalculator::new();
    let mut simulation = Simulation::with_strategies(
        params,
        options(num_players, sim_time, seed),
        Box::new(calculator.clone()),
        Box::new(NaiveMatchmaker::new()),
    )
    .unwrap();
    let report = simulation.run().unwrap();
    (report, calculator.games())
}
