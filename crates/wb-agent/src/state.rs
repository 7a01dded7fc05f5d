//! Locomotion state enumeration.

/// What an agent is doing this tick.
///
/// Derived from task presence by [`Agent::state`][crate::Agent::state] — it
/// is never stored, so it can never disagree with the tasks.  There is no
/// terminal state: agents persist until the owning scene despawns them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocomotionState {
    /// Constant-speed forward translation (default).
    #[default]
    Moving,
    /// A turn task owns the tick; position is frozen, orientation slerps.
    Turning,
    /// A halt task owns the tick; position and orientation are both frozen.
    Halted,
}

impl LocomotionState {
    /// Column label for CSV/console output.
    pub fn as_str(self) -> &'static str {
        match self {
            LocomotionState::Moving  => "moving",
            LocomotionState::Turning => "turning",
            LocomotionState::Halted  => "halted",
        }
    }
}

impl std::fmt::Display for LocomotionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
