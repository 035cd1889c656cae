//! Player registry
//!
//! Holds the mutable per-player state for one run. Players are addressed by
//! their index, which doubles as their id.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::types::{Player, PlayerId, PlayerStatus, SimTime};

/// Count of players in each lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCensus {
    pub idle: usize,
    pub queued: usize,
    pub in_game: usize,
}

impl PlayerCensus {
    pub fn total(&self) -> usize {
        self.idle + self.queued + self.in_game
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    /// Create a registry with one idle player per initial rating.
    pub fn from_ratings(ratings: impl IntoIterator<Item = f64>) -> Self {
        Self {
            players: ratings
                .into_iter()
                .enumerate()
                .map(|(id, rating)| Player::new(id, rating))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .get(id)
            .ok_or_else(|| SimulationError::UnknownPlayer { player_id: id }.into())
    }

    fn get_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .get_mut(id)
            .ok_or_else(|| SimulationError::UnknownPlayer { player_id: id }.into())
    }

    pub fn rating(&self, id: PlayerId) -> Result<f64> {
        Ok(self.get(id)?.rating)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Move an idle player into a queue.
    ///
    /// Returns `false` (and changes nothing) if the player is already queued
    /// or in a game.
    pub fn try_enqueue(&mut self, id: PlayerId, now: SimTime) -> Result<bool> {
        let player = self.get_mut(id)?;
        if !player.is_idle() {
            return Ok(false);
        }
        player.status = PlayerStatus::Queued;
        player.last_queue_join_time = Some(now);
        Ok(true)
    }

    pub fn start_game(&mut self, id: PlayerId) -> Result<()> {
        self.get_mut(id)?.status = PlayerStatus::InGame;
        Ok(())
    }

    /// Free a player after their game and set their post-game rating.
    pub fn finish_game(&mut self, id: PlayerId, new_rating: f64) -> Result<()> {
        let player = self.get_mut(id)?;
        player.rating = new_rating;
        player.status = PlayerStatus::Idle;
        player.games_played += 1;
        Ok(())
    }

    /// Games played summed over every player
    pub fn total_games_played(&self) -> u64 {
        self.players.iter().map(|player| player.games_played).sum()
    }

    pub fn census(&self) -> PlayerCensus {
        self.players
            .iter()
            .fold(PlayerCensus::default(), |mut census, player| {
                match player.status {
                    PlayerStatus::Idle => census.idle += 1,
                    PlayerStatus::Queued => census.queued += 1,
                    PlayerStatus::InGame => census.in_game += 1,
                }
                census
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_from_ratings() {
        let registry = PlayerRegistry::from_ratings(vec![1500.0, 1600.0, 1400.0]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.rating(1).unwrap(), 1600.0);
        assert_eq!(registry.get(2).unwrap().id, 2);
        assert_eq!(registry.census().idle, 3);
    }

    #[test]
    fn test_enqueue_only_when_idle() {
        let mut registry = PlayerRegistry::from_ratings(vec![1500.0]);

        assert!(registry.try_enqueue(0, 12.0).unwrap());
        assert_eq!(registry.get(0).unwrap().status, PlayerStatus::Queued);
        assert_eq!(registry.get(0).unwrap().last_queue_join_time, Some(12.0));

        // Duplicate join is ignored and keeps the original join time
        assert!(!registry.try_enqueue(0, 15.0).unwrap());
        assert_eq!(registry.get(0).unwrap().last_queue_join_time, Some(12.0));

        registry.start_game(0).unwrap();
        assert!(!registry.try_enqueue(0, 20.0).unwrap());
    }

    #[test]
    fn test_finish_game_frees_player() {
        let mut registry = PlayerRegistry::from_ratings(vec![1500.0]);
        registry.try_enqueue(0, 0.0).unwrap();
        registry.start_game(0).unwrap();
        registry.finish_game(0, 1520.0).unwrap();

        let player = registry.get(0).unwrap();
        assert!(player.is_idle());
        assert_eq!(player.rating, 1520.0);
        assert_eq!(player.games_played, 1);
        assert_eq!(registry.total_games_played(), 1);
    }

    #[test]
    fn test_census_counts_every_player_once() {
        let mut registry = PlayerRegistry::from_ratings(vec![1500.0; 5]);
        registry.try_enqueue(0, 0.0).unwrap();
        registry.try_enqueue(1, 0.0).unwrap();
        registry.start_game(1).unwrap();

        let census = registry.census();
        assert_eq!(census.idle, 3);
        assert_eq!(census.queued, 1);
        assert_eq!(census.in_game, 1);
        assert_eq!(census.total(), 5);
    }

    #[test]
    fn test_unknown_player() {
        let mut registry = PlayerRegistry::from_ratings(vec![1500.0]);
        assert!(registry.get(3).is_err());
        assert!(registry.try_enqueue(3, 0.0).is_err());
    }
}
