//! Rating calculator trait
//!
//! This module defines the interface for deciding game outcomes and the
//! rating changes they cause.

use serde::{Deserialize, Serialize};

use crate::config::SimulationParameters;
use crate::error::Result;
use crate::rng::SimulationRng;
use crate::types::{PlayerId, QueueType, RatingChange};

/// Result of resolving one finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: PlayerId,
    /// One change per participant, in roster order
    pub rating_changes: Vec<RatingChange>,
}

/// Trait for rating-update strategies
pub trait RatingCalculator: Send + Sync {
    /// Name the strategy is registered under
    fn name(&self) -> &'static str;

    /// Draw the starting rating of a newly created player
    fn initial_rating(&self, rng: &mut SimulationRng) -> Result<f64>;

    /// Pick the outcome of a finished game and the resulting rating changes
    ///
    /// # Arguments
    /// * `queue_type` - Queue the game was formed in
    /// * `players` - List of (player_id, current_rating) pairs, in match order
    /// * `params` - Bonus and penalty values
    /// * `rng` - The run's random stream
    fn calculate_outcome(
        &self,
        queue_type: QueueType,
        players: &[(PlayerId, f64)],
        params: &SimulationParameters,
        rng: &mut SimulationRng,
    ) -> Result<MatchOutcome>;
}
