//! Configuration management for the simulator
//!
//! Simulation parameters come from a JSON or TOML file; per-run options come
//! from the command line.

pub mod run;
pub mod simulation;

// Re-export commonly used types
pub use run::RunOptions;
pub use simulation::SimulationParameters;
