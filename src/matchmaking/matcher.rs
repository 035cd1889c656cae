//! Matchmaking strategies deciding which queued players form a match
//!
//! A strategy only chooses the group; recording stats, updating player
//! state and scheduling the game are handled by the engine so every strategy
//! gets identical bookkeeping.

use crate::config::SimulationParameters;
use crate::matchmaking::queue::MatchQueue;
use crate::types::{QueueEntry, QueueType};

/// Trait for matchmaking algorithms
pub trait MatchmakingStrategy: Send + Sync {
    /// Name the strategy is registered under
    fn name(&self) -> &'static str;

    /// Remove and return the entries of the next match that can form now.
    ///
    /// Returns `None` when the queue cannot form a match, leaving it
    /// untouched. The engine calls this repeatedly until it returns `None`.
    fn next_group(
        &self,
        queue_type: QueueType,
        queue: &mut MatchQueue,
        params: &SimulationParameters,
    ) -> Option<Vec<QueueEntry>>;
}

/// Greedy, threshold-draining matchmaker
///
/// This matcher:
/// - pairs the two oldest entries of the `1v1` queue
/// - takes the whole `group` queue once it reaches `group_min`, capped at
///   the oldest `group_max` entries
/// - never holds back a formable match
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveMatchmaker;

/// Players in a duel
pub const DUEL_SIZE: usize = 2;

impl NaiveMatchmaker {
    pub fn new() -> Self {
        Self
    }
}

impl MatchmakingStrategy for NaiveMatchmaker {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn next_group(
        &self,
        queue_type: QueueType,
        queue: &mut MatchQueue,
        params: &SimulationParameters,
    ) -> Option<Vec<QueueEntry>> {
        let size = match queue_type {
            QueueType::Duel => {
                if queue.len() < DUEL_SIZE {
                    return None;
                }
                DUEL_SIZE
            }
            QueueType::Group => {
                let (group_min, group_max) = params.group_bounds();
                if queue.len() < group_min {
                    return None;
                }
                queue.len().min(group_max)
            }
        };

        Some(queue.pop_oldest(size))
    }
}
