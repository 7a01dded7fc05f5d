//! `wb-core` — foundational types for the warebots simulation core.
//!
//! This crate is a dependency of every other `wb-*` crate.  It intentionally
//! has no `wb-*` dependencies and minimal external ones (only `glam`, `rand`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `AgentId`, `PayloadId`                            |
//! | [`arena`]   | `Arena` — bounded ground-plane extents            |
//! | [`clock`]   | `CountdownClock`, `format_mm_ss`                  |
//! | [`rng`]     | `SimRng` (seeded, reproducible)                   |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod arena;
pub mod clock;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arena::Arena;
pub use clock::{CountdownClock, format_mm_ss};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, PayloadId};
pub use rng::SimRng;
