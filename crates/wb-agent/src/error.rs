//! Error types for wb-agent.

use thiserror::Error;

use wb_maneuver::ManeuverError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("forward speed must be positive and finite, got {0}")]
    InvalidSpeed(f32),

    #[error("cargo capacity must be at least 1")]
    ZeroCapacity,

    #[error("cargo item height must be positive and finite, got {0}")]
    InvalidItemHeight(f32),

    #[error(transparent)]
    Maneuver(#[from] ManeuverError),
}

pub type AgentResult<T> = Result<T, AgentError>;
