//! The `Agent` — position, orientation, task ownership, and the tick driver.

use glam::{Quat, Vec3};

use wb_core::PayloadId;
use wb_maneuver::{HaltTask, TurnTask};

use crate::cargo::{CargoStack, CarrySlot};
use crate::config::AgentConfig;
use crate::reaction::{CollisionCategory, Reaction};
use crate::state::LocomotionState;
use crate::AgentResult;

/// One autonomous robot.
///
/// Owned exclusively by the simulation: created at spawn, mutated every tick
/// and by synchronously dispatched collision events, dropped at despawn.
/// At most one turn task and one halt task exist at a time; when both exist
/// (a halt created mid-turn) the turn is resumed and the halt waits — a halt
/// never interrupts a turn.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    position:    Vec3,
    orientation: Quat,
    config:      AgentConfig,
    turn:        Option<TurnTask>,
    halt:        Option<HaltTask>,
    cargo:       CargoStack,
    /// Total distance translated since spawn, metres.
    odometer:    f32,
}

impl Agent {
    /// Create an agent at `position` facing `orientation`.
    ///
    /// Fails on invalid configuration (non-positive speed, zero capacity,
    /// bad item height) — misconfiguration is rejected here rather than
    /// tolerated at runtime.
    pub fn spawn(config: AgentConfig, position: Vec3, orientation: Quat) -> AgentResult<Self> {
        config.validate()?;
        let cargo = CargoStack::new(config.cargo)?;
        Ok(Self {
            position,
            orientation,
            config,
            turn: None,
            halt: None,
            cargo,
            odometer: 0.0,
        })
    }

    // ── Tick driver ───────────────────────────────────────────────────────

    /// Advance the agent by `dt` seconds.
    ///
    /// Exactly one of three things happens, by state precedence:
    /// an active turn is resumed (and dropped when it finishes, with the
    /// orientation snapped to its exact target); else an active halt counts
    /// down; else the agent translates forward at constant speed.
    ///
    /// Callers must not invoke this once the global countdown has stopped.
    pub fn advance(&mut self, dt: f32) {
        if let Some(turn) = self.turn.as_mut() {
            let (orientation, status) = turn.resume(dt);
            self.orientation = orientation;
            if status.is_finished() {
                self.turn = None;
            }
            return;
        }

        if let Some(halt) = self.halt.as_mut() {
            if halt.resume(dt).is_finished() {
                self.halt = None;
            }
            return;
        }

        let step = self.forward() * self.config.forward_speed * dt;
        self.position += step;
        self.odometer += step.length();
    }

    // ── Collision reactions ───────────────────────────────────────────────

    /// Dispatch one collision-enter event through the reaction policy.
    ///
    /// Duplicate events while the matching task is active are no-ops: an
    /// in-flight turn is never restarted and a running halt clock is never
    /// rewound.
    pub fn on_collision(&mut self, category: CollisionCategory) {
        match self.config.policy.reaction_for(category) {
            Reaction::StartTurn => self.start_turn(),
            Reaction::StartHalt => self.start_halt(),
            Reaction::Ignore => {}
        }
    }

    /// Begin a reactive turn from the current orientation.  No-op while a
    /// turn is already in flight.
    pub fn start_turn(&mut self) {
        if self.turn.is_some() {
            return;
        }
        self.turn = Some(TurnTask::begin(self.orientation, &self.config.turn));
    }

    /// Begin a timed halt.  No-op while a halt is already pending or active.
    pub fn start_halt(&mut self) {
        if self.halt.is_some() {
            return;
        }
        self.halt = Some(HaltTask::begin(&self.config.halt));
    }

    // ── Cargo ─────────────────────────────────────────────────────────────

    /// Forwarded payload-contact event: stack `payload` if there is room.
    ///
    /// See [`CargoStack::try_attach`] for the at-most-once caller
    /// precondition.
    pub fn try_attach(&mut self, payload: PayloadId) -> Option<CarrySlot> {
        self.cargo.try_attach(payload)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Current locomotion state, derived from task presence.
    pub fn state(&self) -> LocomotionState {
        if self.turn.is_some() {
            LocomotionState::Turning
        } else if self.halt.is_some() {
            LocomotionState::Halted
        } else {
            LocomotionState::Moving
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Unit forward vector (local +Z rotated by the current orientation).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    #[inline]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    #[inline]
    pub fn cargo(&self) -> &CargoStack {
        &self.cargo
    }

    /// The in-flight turn, if any (inspection only).
    #[inline]
    pub fn turn_task(&self) -> Option<&TurnTask> {
        self.turn.as_ref()
    }

    /// The pending or active halt, if any (inspection only).
    #[inline]
    pub fn halt_task(&self) -> Option<&HaltTask> {
        self.halt.as_ref()
    }

    /// Total distance translated since spawn, metres.
    #[inline]
    pub fn odometer(&self) -> f32 {
        self.odometer
    }
}
