//! Timed halt maneuver.
//!
//! A halt is binary: while the task is alive the agent's forward motion is
//! fully suppressed and nothing else changes — orientation is untouched and
//! there is no ramp-down or ramp-up.

use crate::{ManeuverError, ManeuverResult, TaskStatus};

/// Default halt duration in seconds.
pub const DEFAULT_HALT_SECS: f32 = 3.0;

// ── HaltProfile ───────────────────────────────────────────────────────────────

/// Validated halt configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HaltProfile {
    duration_secs: f32,
}

impl HaltProfile {
    /// Create a profile.  `duration_secs` must be positive and finite.
    pub fn new(duration_secs: f32) -> ManeuverResult<Self> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(ManeuverError::InvalidDuration(duration_secs));
        }
        Ok(Self { duration_secs })
    }

    #[inline]
    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }
}

impl Default for HaltProfile {
    fn default() -> Self {
        Self { duration_secs: DEFAULT_HALT_SECS }
    }
}

// ── HaltTask ──────────────────────────────────────────────────────────────────

/// A one-shot delay suppressing locomotion until `remaining` runs out.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HaltTask {
    remaining: f32,
}

impl HaltTask {
    /// Start the delay at the profile's full duration.
    pub fn begin(profile: &HaltProfile) -> Self {
        Self { remaining: profile.duration_secs() }
    }

    /// Count down by `dt` seconds.  Finished once `remaining <= 0`.
    pub fn resume(&mut self, dt: f32) -> TaskStatus {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            TaskStatus::Finished
        } else {
            TaskStatus::Active
        }
    }

    /// Seconds of suppression left.
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
