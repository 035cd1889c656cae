//! Error types for the matchmaking simulator
//!
//! Follows the same split as the rest of the crate: `anyhow` carries errors
//! between layers, while the variants below name the failure classes callers
//! may want to tell apart (via `downcast_ref`).

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific simulation failures
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String },

    #[error("Invalid event time {time}: events may not be scheduled before {floor}")]
    InvalidTime { time: f64, floor: f64 },

    #[error("Player not found: {player_id}")]
    UnknownPlayer { player_id: usize },

    #[error("Invalid game: {reason}")]
    InvalidGame { reason: String },

    #[error("Unknown {kind} strategy: {name}")]
    UnknownStrategy { kind: String, name: String },

    #[error("Invalid run options: {reason}")]
    InvalidRunOptions { reason: String },

    #[error("Failed to write report to {path}: {message}")]
    ReportWrite { path: String, message: String },
}

impl SimulationError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        SimulationError::ConfigValidation {
            message: message.into(),
        }
    }
}
