//! Explicit per-run simulation state
//!
//! Everything a run mutates lives here and is passed by `&mut` to the
//! components that need it. Nothing is process-global, so independent runs
//! can execute side by side.

use crate::config::SimulationParameters;
use crate::matchmaking::QueueSet;
use crate::registry::PlayerRegistry;
use crate::rng::SimulationRng;
use crate::scheduler::EventScheduler;
use crate::stats::StatsCollector;
use crate::types::SimTime;

#[derive(Debug)]
pub struct SimulationContext {
    pub params: SimulationParameters,
    pub registry: PlayerRegistry,
    pub queues: QueueSet,
    pub scheduler: EventScheduler,
    pub stats: StatsCollector,
    pub rng: SimulationRng,
    /// Time of the event currently being processed
    pub clock: SimTime,
}

impl SimulationContext {
    pub fn new(params: SimulationParameters, ratings: Vec<f64>, seed: u64) -> Self {
        Self::with_rng(params, ratings, SimulationRng::new(seed))
    }

    pub fn with_rng(params: SimulationParameters, ratings: Vec<f64>, rng: SimulationRng) -> Self {
        Self {
            params,
            registry: PlayerRegistry::from_ratings(ratings),
            queues: QueueSet::new(),
            scheduler: EventScheduler::new(),
            stats: StatsCollector::new(),
            rng,
            clock: 0.0,
        }
    }
}
