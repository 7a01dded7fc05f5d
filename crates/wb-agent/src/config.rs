//! Per-agent configuration.

use wb_maneuver::{HaltProfile, TurnProfile};

use crate::cargo::CargoConfig;
use crate::reaction::ReactionPolicy;
use crate::{AgentError, AgentResult};

/// Default forward speed, metres per second.
pub const DEFAULT_FORWARD_SPEED: f32 = 5.0;

/// All the knobs for one robot agent.
///
/// Fields are plain data so application code can assemble configs literally;
/// validation happens once, at [`Agent::spawn`][crate::Agent::spawn].  The
/// turn and halt profiles are already validated by their own constructors.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentConfig {
    /// Constant forward speed while `Moving`, metres per second.
    pub forward_speed: f32,
    /// Yaw delta and duration of reactive turns.
    pub turn: TurnProfile,
    /// Duration of reactive halts.
    pub halt: HaltProfile,
    /// Category → reaction mapping.
    pub policy: ReactionPolicy,
    /// Carry capacity and stacking geometry.
    pub cargo: CargoConfig,
}

impl AgentConfig {
    /// Reject non-positive or non-finite speed.
    ///
    /// Cargo geometry is validated separately when the stack is built.
    pub(crate) fn validate(&self) -> AgentResult<()> {
        if !self.forward_speed.is_finite() || self.forward_speed <= 0.0 {
            return Err(AgentError::InvalidSpeed(self.forward_speed));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            forward_speed: DEFAULT_FORWARD_SPEED,
            turn:          TurnProfile::default(),
            halt:          HaltProfile::default(),
            policy:        ReactionPolicy::default(),
            cargo:         CargoConfig::default(),
        }
    }
}
