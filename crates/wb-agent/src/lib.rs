//! `wb-agent` — per-robot behavior: locomotion, collision reactions, cargo.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`state`]    | `LocomotionState` — Moving / Turning / Halted                |
//! | [`reaction`] | `CollisionCategory`, `Reaction`, `ReactionPolicy`            |
//! | [`cargo`]    | `CargoConfig`, `CargoStack`, `CarrySlot`                     |
//! | [`agent`]    | `Agent` — position, orientation, task ownership, tick driver |
//! | [`config`]   | `AgentConfig` — validated per-agent knobs                    |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                               |
//!
//! # Locomotion model
//!
//! An agent moves forward at constant speed unless a maneuver task owns the
//! tick.  State is *derived* from task presence, so the state-machine
//! invariants hold by construction:
//!
//! - `Turning` iff a [`TurnTask`][wb_maneuver::TurnTask] is active;
//! - `Halted` iff a [`HaltTask`][wb_maneuver::HaltTask] is active and no turn
//!   is running (turning takes precedence and is never interrupted);
//! - `Moving` otherwise.
//!
//! Collision-enter events arrive from the external collision detector as
//! `(category, agent)` pairs; the agent's [`ReactionPolicy`] maps each
//! category to starting a turn, starting a halt, or ignoring it.  Duplicate
//! events while the matching task is active are silent no-ops — the existing
//! task is never restarted and no second task is queued.

pub mod agent;
pub mod cargo;
pub mod config;
pub mod error;
pub mod reaction;
pub mod state;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use cargo::{CargoConfig, CargoStack, CarrySlot};
pub use config::AgentConfig;
pub use error::{AgentError, AgentResult};
pub use reaction::{CollisionCategory, Reaction, ReactionPolicy};
pub use state::LocomotionState;
