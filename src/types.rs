//! Common types used throughout the simulator

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SimulationError;

/// Unique identifier for simulated players (index into the registry)
pub type PlayerId = usize;

/// Simulated time in seconds
pub type SimTime = f64;

/// Matchmaking pool a player can join
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QueueType {
    /// Two-player duels
    #[serde(rename = "1v1")]
    Duel,
    /// Multi-player matches bounded by `group_min..=group_max`
    #[serde(rename = "group")]
    Group,
}

impl QueueType {
    /// Every queue type, in reporting order
    pub const ALL: [QueueType; 2] = [QueueType::Duel, QueueType::Group];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueueType::Duel => "1v1",
            QueueType::Group => "group",
        }
    }
}

impl std::fmt::Display for QueueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueType {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1v1" => Ok(QueueType::Duel),
            "group" => Ok(QueueType::Group),
            other => Err(SimulationError::validation(format!(
                "unknown queue type: {}",
                other
            ))),
        }
    }
}

/// Where a player currently is in the join/match/play cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    Idle,
    Queued,
    InGame,
}

/// Per-player mutable state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub rating: f64,
    pub status: PlayerStatus,
    pub last_queue_join_time: Option<SimTime>,
    pub games_played: u64,
}

impl Player {
    pub fn new(id: PlayerId, rating: f64) -> Self {
        Self {
            id,
            rating,
            status: PlayerStatus::Idle,
            last_queue_join_time: None,
            games_played: 0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status == PlayerStatus::Idle
    }
}

/// A player waiting in a queue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub player_id: PlayerId,
    pub join_time: SimTime,
}

/// What happens when a scheduled event fires, together with its payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A player attempts to enter a queue
    JoinQueue {
        player_id: PlayerId,
        queue_type: QueueType,
    },
    /// A formed match has finished and must be resolved
    GameFinish {
        players: Vec<PlayerId>,
        queue_type: QueueType,
    },
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::JoinQueue { .. } => "join_queue",
            EventKind::GameFinish { .. } => "game_finish",
        }
    }
}

/// Rating change applied to one participant after a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_rating: f64,
    pub new_rating: f64,
}

impl RatingChange {
    pub fn delta(&self) -> f64 {
        self.new_rating - self.old_rating
    }
}
