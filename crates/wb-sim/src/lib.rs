//! `wb-sim` — tick loop orchestrator for the warebots simulation core.
//!
//! # Tick order
//!
//! ```text
//! for each external frame:
//!   ① Countdown — the global clock advances FIRST.  The tick on which it
//!                 reaches its limit freezes the simulation: no agent
//!                 advances on that tick or ever again.
//!   ② Agents    — each agent resumes its active maneuver task or moves
//!                 forward (skipped entirely once the countdown stopped).
//! ```
//!
//! Collision and payload-contact events from the external collision detector
//! are dispatched synchronously between frames via [`Sim::on_collision`] and
//! [`Sim::on_payload_contact`]; both are frozen no-ops after countdown
//! expiry.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wb_core::Arena;
//! use wb_agent::AgentConfig;
//! use wb_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let arena = Arena::new(10.0, 10.0)?;
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .scatter(5, AgentConfig::default(), &arena)
//!     .build()?;
//! sim.run_until_stopped(0.1, &mut NoopObserver);
//! println!("{}", sim.countdown.formatted());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Census, Sim, SimConfig};
