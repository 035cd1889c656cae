//! Matchmaking Sim - offline matchmaking and rating-policy simulator
//!
//! This crate runs a discrete-event simulation of synthetic players cycling
//! through queue join, matchmaking, play and requeue, and reports wait times
//! and rating dispersion per queue type.

pub mod config;
pub mod error;
pub mod matchmaking;
pub mod outcome;
pub mod rating;
pub mod registry;
pub mod report;
pub mod rng;
pub mod scheduler;
pub mod simulation;
pub mod stats;
pub mod strategy;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Result, SimulationError};
pub use types::*;

// Re-export key components
pub use config::{RunOptions, SimulationParameters};
pub use report::SimulationReport;
pub use simulation::{run_batch, RunState, Simulation};
pub use strategy::StrategyRegistry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
