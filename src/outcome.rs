//! Outcome resolver
//!
//! Closes the simulation loop: when a game finishes, the rating calculator
//! picks the result, every participant is freed with their new rating, and
//! each one gets a future `JoinQueue` event into a randomly chosen queue.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::rating::{MatchOutcome, RatingCalculator};
use crate::simulation::SimulationContext;
use crate::types::{EventKind, PlayerId, QueueType, RatingChange, SimTime};

/// A participant's next queue join, scheduled after a game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Requeue {
    pub player_id: PlayerId,
    pub at: SimTime,
    pub queue_type: QueueType,
}

/// Everything that happened while resolving one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGame {
    pub queue_type: QueueType,
    pub winner: PlayerId,
    pub rating_changes: Vec<RatingChange>,
    pub requeues: Vec<Requeue>,
}

pub struct OutcomeResolver {
    calculator: Box<dyn RatingCalculator>,
}

impl OutcomeResolver {
    pub fn new(calculator: Box<dyn RatingCalculator>) -> Self {
        Self { calculator }
    }

    /// Resolve a finished game at the current simulated time
    pub fn resolve(
        &self,
        ctx: &mut SimulationContext,
        players: &[PlayerId],
        queue_type: QueueType,
    ) -> Result<ResolvedGame> {
        let now = ctx.clock;

        let roster = players
            .iter()
            .map(|id| ctx.registry.rating(*id).map(|rating| (*id, rating)))
            .collect::<Result<Vec<_>>>()?;

        let MatchOutcome {
            winner,
            rating_changes,
        } = self
            .calculator
            .calculate_outcome(queue_type, &roster, &ctx.params, &mut ctx.rng)?;

        let mut requeues = Vec::with_capacity(players.len());
        for (player_id, old_rating) in &roster {
            let new_rating = rating_changes
                .iter()
                .find(|change| change.player_id == *player_id)
                .map(|change| change.new_rating)
                .unwrap_or(*old_rating);
            ctx.registry.finish_game(*player_id, new_rating)?;

            let delay = ctx.rng.uniform(
                ctx.params.min_wait_before_requeue,
                ctx.params.max_wait_before_requeue,
            );
            let next_queue = ctx.rng.choose_queue_type();
            ctx.scheduler.schedule(
                now + delay,
                EventKind::JoinQueue {
                    player_id: *player_id,
                    queue_type: next_queue,
                },
            )?;

            requeues.push(Requeue {
                player_id: *player_id,
                at: now + delay,
                queue_type: next_queue,
            });
        }

        debug!(
            "Resolved {} game at {:.2}: winner {} of {} players",
            queue_type,
            now,
            winner,
            players.len()
        );

        Ok(ResolvedGame {
            queue_type,
            winner,
            rating_changes,
            requeues,
        })
    }
}
