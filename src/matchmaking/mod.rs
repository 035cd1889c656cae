//! Matchmaking: per-queue waiting lists, strategies and the engine that
//! turns queued players into scheduled games.

pub mod engine;
pub mod matcher;
pub mod queue;

// Re-export commonly used types
pub use engine::{FormedMatch, MatchmakingEngine};
pub use matcher::{MatchmakingStrategy, NaiveMatchmaker};
pub use queue::{MatchQueue, QueueSet};
