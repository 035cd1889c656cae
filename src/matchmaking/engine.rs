//! Matchmaking engine
//!
//! Drains a queue through the configured strategy and performs the shared
//! bookkeeping for every match that forms: wait-time and rating stats,
//! player state transitions and the future `GameFinish` event.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::matchmaking::matcher::MatchmakingStrategy;
use crate::simulation::SimulationContext;
use crate::types::{EventKind, PlayerId, QueueType, SimTime};

/// A match formed by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormedMatch {
    pub queue_type: QueueType,
    pub players: Vec<PlayerId>,
    /// Per-player wait, in the same order as `players`
    pub wait_times: Vec<f64>,
    /// Mean pre-game rating of the participants
    pub avg_rating: f64,
    pub formed_at: SimTime,
    pub finish_time: SimTime,
}

pub struct MatchmakingEngine {
    strategy: Box<dyn MatchmakingStrategy>,
}

impl MatchmakingEngine {
    pub fn new(strategy: Box<dyn MatchmakingStrategy>) -> Self {
        Self { strategy }
    }

    /// Form every match the strategy allows on `queue_type` at the current
    /// simulated time.
    pub fn try_match(
        &self,
        ctx: &mut SimulationContext,
        queue_type: QueueType,
    ) -> Result<Vec<FormedMatch>> {
        let now = ctx.clock;
        let mut formed = Vec::new();

        while let Some(group) =
            self.strategy
                .next_group(queue_type, ctx.queues.get_mut(queue_type), &ctx.params)
        {
            if group.is_empty() {
                break;
            }

            let players: Vec<PlayerId> = group.iter().map(|entry| entry.player_id).collect();
            let wait_times: Vec<f64> = group.iter().map(|entry| now - entry.join_time).collect();

            let rating_sum = players
                .iter()
                .map(|id| ctx.registry.rating(*id))
                .sum::<Result<f64>>()?;
            let avg_rating = rating_sum / players.len() as f64;

            ctx.stats.record_match(queue_type, &wait_times, avg_rating);
            for id in &players {
                ctx.registry.start_game(*id)?;
            }

            let duration = ctx
                .rng
                .uniform(ctx.params.game_min_duration, ctx.params.game_max_duration);
            let finish_time = now + duration;
            ctx.scheduler.schedule(
                finish_time,
                EventKind::GameFinish {
                    players: players.clone(),
                    queue_type,
                },
            )?;

            debug!(
                "Formed {} match of {} players at {:.2} (avg rating {:.1}, finishes at {:.2})",
                queue_type,
                players.len(),
                now,
                avg_rating,
                finish_time
            );

            formed.push(FormedMatch {
                queue_type,
                players,
                wait_times,
                avg_rating,
                formed_at: now,
                finish_time,
            });
        }

        Ok(formed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationParameters;
    use crate::matchmaking::matcher::NaiveMatchmaker;
    use crate::types::PlayerStatus;

    fn context_with(ratings: Vec<f64>, params: SimulationParameters) -> SimulationContext {
        SimulationContext::new(params, ratings, 1)
    }

    fn enqueue(ctx: &mut SimulationContext, id: PlayerId, queue_type: QueueType, at: SimTime) {
        ctx.clock = at;
        assert!(ctx.registry.try_enqueue(id, at).unwrap());
        ctx.queues.get_mut(queue_type).push(id, at);
    }

    #[test]
    fn test_duel_forms_and_records_stats() {
        let engine = MatchmakingEngine::new(Box::new(NaiveMatchmaker::new()));
        let mut ctx = context_with(vec![1400.0, 1600.0], SimulationParameters::default());

        enqueue(&mut ctx, 0, QueueType::Duel, 10.0);
        assert!(engine.try_match(&mut ctx, QueueType::Duel).unwrap().is_empty());

        enqueue(&mut ctx, 1, QueueType::Duel, 25.0);
        let formed = engine.try_match(&mut ctx, QueueType::Duel).unwrap();
        assert_eq!(formed.len(), 1);

        let game = &formed[0];
        assert_eq!(game.players, vec![0, 1]);
        assert_eq!(game.wait_times, vec![15.0, 0.0]);
        assert_eq!(game.avg_rating, 1500.0);
        assert!(game.finish_time >= 25.0 + 30.0 && game.finish_time <= 25.0 + 90.0);

        assert_eq!(ctx.registry.get(0).unwrap().status, PlayerStatus::InGame);
        assert_eq!(ctx.registry.get(1).unwrap().status, PlayerStatus::InGame);
        assert!(ctx.queues.get(QueueType::Duel).unwrap().is_empty());
        assert_eq!(ctx.scheduler.len(), 1);

        let acc = ctx.stats.accumulator(QueueType::Duel).unwrap();
        assert_eq!(acc.wait_times, vec![15.0, 0.0]);
        assert_eq!(acc.avg_ratings, vec![1500.0]);
    }

    #[test]
    fn test_group_waits_for_threshold_then_drains() {
        let engine = MatchmakingEngine::new(Box::new(NaiveMatchmaker::new()));
        let params = SimulationParameters {
            group_min: 3.0,
            group_max: 4.0,
            ..SimulationParameters::default()
        };
        let mut ctx = context_with(vec![1500.0; 6], params);

        enqueue(&mut ctx, 0, QueueType::Group, 0.0);
        enqueue(&mut ctx, 1, QueueType::Group, 1.0);
        assert!(engine.try_match(&mut ctx, QueueType::Group).unwrap().is_empty());

        enqueue(&mut ctx, 2, QueueType::Group, 2.0);
        let formed = engine.try_match(&mut ctx, QueueType::Group).unwrap();
        assert_eq!(formed.len(), 1);
        assert_eq!(formed[0].players, vec![0, 1, 2]);
        assert_eq!(formed[0].wait_times, vec![2.0, 1.0, 0.0]);

        let acc = ctx.stats.accumulator(QueueType::Group).unwrap();
        assert_eq!(acc.match_sizes, vec![3]);
    }

    #[test]
    fn test_other_queue_untouched() {
        let engine = MatchmakingEngine::new(Box::new(NaiveMatchmaker::new()));
        let mut ctx = context_with(vec![1500.0; 3], SimulationParameters::default());

        enqueue(&mut ctx, 0, QueueType::Duel, 0.0);
        enqueue(&mut ctx, 1, QueueType::Duel, 0.0);
        enqueue(&mut ctx, 2, QueueType::Group, 0.0);

        assert!(engine.try_match(&mut ctx, QueueType::Group).unwrap().is_empty());
        assert_eq!(ctx.queues.get(QueueType::Duel).unwrap().len(), 2);
    }
}
