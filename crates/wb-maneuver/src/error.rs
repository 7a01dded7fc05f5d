//! Error types for wb-maneuver.
//!
//! Only construction-time misconfiguration is an error here.  Starting a
//! maneuver while one is already running is a policy no-op handled by the
//! owning agent, not a failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManeuverError {
    #[error("maneuver duration must be positive and finite, got {0}")]
    InvalidDuration(f32),

    #[error("yaw delta must be finite, got {0}")]
    InvalidYaw(f32),
}

pub type ManeuverResult<T> = Result<T, ManeuverError>;
