//! Smooth bounded-time turn maneuver.
//!
//! A turn interpolates the agent's orientation from its value at trigger time
//! to that orientation composed with a fixed yaw rotation, over a fixed
//! duration.  Interpolation is shortest-arc unit-quaternion slerp — *not*
//! linear angle interpolation.  For yaw deltas near 180° the shortest-arc
//! choice is observably different from a naive lerp, so glam's `Quat::slerp`
//! (which negates one endpoint when the dot product is negative) is exactly
//! the required semantics.

use glam::Quat;

use crate::{ManeuverError, ManeuverResult, TaskStatus};

/// Default yaw delta in degrees (positive = clockwise when viewed from above).
pub const DEFAULT_YAW_DEGREES: f32 = 90.0;

/// Default turn duration in seconds.
pub const DEFAULT_TURN_SECS: f32 = 0.3;

// ── TurnProfile ───────────────────────────────────────────────────────────────

/// Validated turn configuration: how far and how fast an agent swings.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnProfile {
    yaw_degrees:   f32,
    duration_secs: f32,
}

impl TurnProfile {
    /// Create a profile.
    ///
    /// `yaw_degrees` may be any finite value (negative turns left);
    /// `duration_secs` must be positive and finite.
    pub fn new(yaw_degrees: f32, duration_secs: f32) -> ManeuverResult<Self> {
        if !yaw_degrees.is_finite() {
            return Err(ManeuverError::InvalidYaw(yaw_degrees));
        }
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(ManeuverError::InvalidDuration(duration_secs));
        }
        Ok(Self { yaw_degrees, duration_secs })
    }

    #[inline]
    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    #[inline]
    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }

    /// The yaw delta as a rotation about the vertical axis.
    #[inline]
    pub fn yaw_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw_degrees.to_radians())
    }
}

impl Default for TurnProfile {
    fn default() -> Self {
        Self {
            yaw_degrees:   DEFAULT_YAW_DEGREES,
            duration_secs: DEFAULT_TURN_SECS,
        }
    }
}

// ── TurnTask ──────────────────────────────────────────────────────────────────

/// An in-flight turn: captured endpoints plus elapsed time.
///
/// Invariant: `0 <= elapsed <= duration` at all times; the final resume snaps
/// the reported orientation to exactly `target` so no interpolation residue
/// survives the maneuver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnTask {
    start:    Quat,
    target:   Quat,
    duration: f32,
    elapsed:  f32,
}

impl TurnTask {
    /// Capture a turn starting from orientation `from`.
    ///
    /// The target is `from` composed with the profile's yaw rotation.
    pub fn begin(from: Quat, profile: &TurnProfile) -> Self {
        Self {
            start:    from,
            target:   from * profile.yaw_rotation(),
            duration: profile.duration_secs(),
            elapsed:  0.0,
        }
    }

    /// Advance the turn by `dt` seconds.
    ///
    /// Returns the orientation the agent must adopt this tick and whether the
    /// task finished.  On the finishing tick the orientation is *exactly*
    /// [`target`][Self::target], not the slerp at fraction 1.0 recomputed.
    pub fn resume(&mut self, dt: f32) -> (Quat, TaskStatus) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.elapsed >= self.duration {
            return (self.target, TaskStatus::Finished);
        }
        let fraction = (self.elapsed / self.duration).clamp(0.0, 1.0);
        (self.start.slerp(self.target, fraction), TaskStatus::Active)
    }

    /// The orientation captured when the turn was triggered.
    #[inline]
    pub fn start(&self) -> Quat {
        self.start
    }

    /// The orientation the agent will hold when the turn completes.
    #[inline]
    pub fn target(&self) -> Quat {
        self.target
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }
}
