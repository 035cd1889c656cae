//! Naive Elo-style rating updates
//!
//! One participant is drawn uniformly at random as the winner. The winner
//! gains a fixed bonus and every other participant loses a fixed penalty;
//! the amounts depend only on the queue type. Ratings are not clamped.

use crate::config::SimulationParameters;
use crate::error::{Result, SimulationError};
use crate::rating::calculator::{MatchOutcome, RatingCalculator};
use crate::rng::SimulationRng;
use crate::types::{PlayerId, QueueType, RatingChange};

/// Mean of the starting rating distribution
pub const INITIAL_RATING_MEAN: f64 = 1500.0;
/// Standard deviation of the starting rating distribution
pub const INITIAL_RATING_STD_DEV: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveEloCalculator;

impl NaiveEloCalculator {
    pub fn new() -> Self {
        Self
    }

    /// (winner bonus, loser penalty) for a queue type
    fn deltas(queue_type: QueueType, params: &SimulationParameters) -> (f64, f64) {
        match queue_type {
            QueueType::Duel => (params.duel_win_bonus, params.duel_loss_penalty),
            QueueType::Group => (params.group_win_bonus, params.group_loss_penalty),
        }
    }
}

impl RatingCalculator for NaiveEloCalculator {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn initial_rating(&self, rng: &mut SimulationRng) -> Result<f64> {
        rng.normal(INITIAL_RATING_MEAN, INITIAL_RATING_STD_DEV)
    }

    fn calculate_outcome(
        &self,
        queue_type: QueueType,
        players: &[(PlayerId, f64)],
        params: &SimulationParameters,
        rng: &mut SimulationRng,
    ) -> Result<MatchOutcome> {
        if players.is_empty() {
            return Err(SimulationError::InvalidGame {
                reason: "No players provided for outcome calculation".to_string(),
            }
            .into());
        }

        let winner_index = rng.choose_index(players.len());
        let winner = players[winner_index].0;
        let (bonus, penalty) = Self::deltas(queue_type, params);

        let rating_changes = players
            .iter()
            .enumerate()
            .map(|(index, (player_id, rating))| {
                let delta = if index == winner_index { bonus } else { -penalty };
                RatingChange {
                    player_id: *player_id,
                    old_rating: *rating,
                    new_rating: rating + delta,
                }
            })
            .collect();

        Ok(MatchOutcome {
            winner,
            rating_changes,
        })
    }
}
