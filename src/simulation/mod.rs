//! Discrete-event simulation of the matchmaking loop
//!
//! Players join queues, get matched, play, and requeue; the driver advances
//! simulated time event by event until the horizon.

pub mod batch;
pub mod context;
pub mod driver;

// Re-export commonly used types
pub use batch::run_batch;
pub use context::SimulationContext;
pub use driver::{Census, RunState, Simulation};
