//! `wb-maneuver` — time-bounded maneuver tasks for robot agents.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`task`]   | `TaskStatus` — shared resume result                       |
//! | [`turn`]   | `TurnProfile`, `TurnTask` — slerp orientation maneuver    |
//! | [`halt`]   | `HaltProfile`, `HaltTask` — timed locomotion suppression  |
//! | [`error`]  | `ManeuverError`, `ManeuverResult<T>`                      |
//!
//! # Resumable-task model
//!
//! A maneuver is a plain struct holding its own timing state, resumed once
//! per simulation tick by the owning agent:
//!
//! 1. The agent creates the task when a collision reaction fires.
//! 2. Each tick it calls `resume(dt)` — the task advances its internal clock
//!    and reports [`TaskStatus::Active`] or [`TaskStatus::Finished`].
//! 3. On `Finished` the agent drops the task and falls back to forward
//!    motion.
//!
//! Tasks never block, never span multiple agents, and carry no scheduler —
//! their state is explicit and serializable (enable the `serde` feature).

pub mod error;
pub mod halt;
pub mod task;
pub mod turn;


pub use error::{ManeuverError, ManeuverResult};
pub use halt::{HaltProfile, HaltTask};
pub use task::TaskStatus;
pub use turn::{TurnProfile, TurnTask};
