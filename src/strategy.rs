//! Strategy registry
//!
//! Maps strategy names to constructors so the driver can be handed boxed
//! strategies without knowing which implementations exist. New variants are
//! added by registering another constructor.

use std::collections::BTreeMap;

use crate::error::{Result, SimulationError};
use crate::matchmaking::{MatchmakingStrategy, NaiveMatchmaker};
use crate::rating::{NaiveEloCalculator, RatingCalculator};

/// Constructor for a rating-update strategy
pub type RatingFactory = fn() -> Box<dyn RatingCalculator>;

/// Constructor for a matchmaking strategy
pub type MatchmakingFactory = fn() -> Box<dyn MatchmakingStrategy>;

#[derive(Debug, Clone, Default)]
pub struct StrategyRegistry {
    rating: BTreeMap<String, RatingFactory>,
    matchmaking: BTreeMap<String, MatchmakingFactory>,
}

impl StrategyRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in `naive` strategies
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_rating("naive", || Box::new(NaiveEloCalculator::new()));
        registry.register_matchmaking("naive", || Box::new(NaiveMatchmaker::new()));
        registry
    }

    pub fn register_rating(&mut self, name: impl Into<String>, factory: RatingFactory) {
        self.rating.insert(name.into(), factory);
    }

    pub fn register_matchmaking(&mut self, name: impl Into<String>, factory: MatchmakingFactory) {
        self.matchmaking.insert(name.into(), factory);
    }

    pub fn rating(&self, name: &str) -> Result<Box<dyn RatingCalculator>> {
        let factory = self
            .rating
            .get(name)
            .ok_or_else(|| SimulationError::UnknownStrategy {
                kind: "rating".to_string(),
                name: name.to_string(),
            })?;
        Ok(factory())
    }

    pub fn matchmaking(&self, name: &str) -> Result<Box<dyn MatchmakingStrategy>> {
        let factory = self
            .matchmaking
            .get(name)
            .ok_or_else(|| SimulationError::UnknownStrategy {
                kind: "matchmaking".to_string(),
                name: name.to_string(),
            })?;
        Ok(factory())
    }

    pub fn rating_names(&self) -> Vec<&str> {
        self.rating.keys().map(String::as_str).collect()
    }

    pub fn matchmaking_names(&self) -> Vec<&str> {
        self.matchmaking.keys().map(String::as_str).collect()
    }
}
