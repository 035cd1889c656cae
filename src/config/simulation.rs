//! Simulation parameters
//!
//! The ten tunables that drive game length, requeue behaviour, group sizing
//! and rating deltas. Loaded once from a JSON or TOML file before a run and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, SimulationError};

/// Immutable tunables consumed by the matchmaking and outcome components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationParameters {
    /// Minimum game duration (seconds)
    pub game_min_duration: f64,
    /// Maximum game duration (seconds)
    pub game_max_duration: f64,
    /// Minimum wait after finishing a game before requeueing
    pub min_wait_before_requeue: f64,
    /// Maximum wait after finishing a game before requeueing
    pub max_wait_before_requeue: f64,
    /// Rating bonus for winning a duel
    pub duel_win_bonus: f64,
    /// Rating penalty for losing a duel
    pub duel_loss_penalty: f64,
    /// Minimum players needed for a group match
    pub group_min: f64,
    /// Maximum players in a group match
    pub group_max: f64,
    /// Rating bonus for winning a group game
    pub group_win_bonus: f64,
    /// Rating penalty for every group game loser
    pub group_loss_penalty: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            game_min_duration: 30.0,
            game_max_duration: 90.0,
            min_wait_before_requeue: 5.0,
            max_wait_before_requeue: 30.0,
            duel_win_bonus: 20.0,
            duel_loss_penalty: 20.0,
            group_min: 6.0,
            group_max: 10.0,
            group_win_bonus: 10.0,
            group_loss_penalty: 5.0,
        }
    }
}

/// Supported on-disk formats, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ConfigFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ConfigFormat::Toml),
            _ => Err(SimulationError::validation(format!(
                "expecting a .json or .toml file, got {}",
                path.display()
            ))
            .into()),
        }
    }
}

impl SimulationParameters {
    /// Load and validate parameters from a `.json` or `.toml` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;

        if !path.exists() {
            return Err(SimulationError::ConfigNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| SimulationError::ConfigNotFound {
            path: format!("{} ({})", path.display(), e),
        })?;

        let params = match format {
            ConfigFormat::Json => Self::from_json_str(&contents)?,
            ConfigFormat::Toml => Self::from_toml_str(&contents)?,
        };

        info!("Loaded simulation parameters from {}", path.display());
        debug!("{:?}", params);
        Ok(params)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(contents)
            .map_err(|e| SimulationError::validation(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let params: Self =
            toml::from_str(contents).map_err(|e| SimulationError::validation(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Validate value ranges and cross-field constraints
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("game_min_duration", self.game_min_duration),
            ("game_max_duration", self.game_max_duration),
            ("min_wait_before_requeue", self.min_wait_before_requeue),
            ("max_wait_before_requeue", self.max_wait_before_requeue),
            ("duel_win_bonus", self.duel_win_bonus),
            ("duel_loss_penalty", self.duel_loss_penalty),
            ("group_min", self.group_min),
            ("group_max", self.group_max),
            ("group_win_bonus", self.group_win_bonus),
            ("group_loss_penalty", self.group_loss_penalty),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SimulationError::validation(format!("{} must be finite", name)).into());
        }

        if self.game_min_duration < 0.0 || self.min_wait_before_requeue < 0.0 {
            return Err(
                SimulationError::validation("durations and delays cannot be negative").into(),
            );
        }
        if self.game_min_duration > self.game_max_duration {
            return Err(SimulationError::validation(
                "game_min_duration cannot exceed game_max_duration",
            )
            .into());
        }
        if self.min_wait_before_requeue > self.max_wait_before_requeue {
            return Err(SimulationError::validation(
                "min_wait_before_requeue cannot exceed max_wait_before_requeue",
            )
            .into());
        }

        if self.group_min.fract() != 0.0 || self.group_max.fract() != 0.0 {
            return Err(
                SimulationError::validation("group_min and group_max must be whole numbers").into(),
            );
        }
        if self.group_min < 2.0 {
            return Err(SimulationError::validation("group_min must be at least 2").into());
        }
        if self.group_min > self.group_max {
            return Err(SimulationError::validation("group_min cannot exceed group_max").into());
        }

        Ok(())
    }

    /// Group size bounds as player counts
    pub fn group_bounds(&self) -> (usize, usize) {
        (self.group_min as usize, self.group_max as usize)
    }
}
