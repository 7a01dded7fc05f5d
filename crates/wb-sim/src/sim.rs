//! The `Sim` struct and its tick loop.

use wb_agent::{Agent, CarrySlot, CollisionCategory, LocomotionState};
use wb_core::clock::DEFAULT_LIMIT_SECS;
use wb_core::{AgentId, CountdownClock, PayloadId};

use crate::{SimError, SimObserver, SimResult};

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds until the global countdown freezes everything.
    pub countdown_limit_secs: f32,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    /// Master RNG seed for scatter placement.  The same seed always produces
    /// the same spawn layout.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            countdown_limit_secs:    DEFAULT_LIMIT_SECS,
            snapshot_interval_ticks: 1,
            seed:                    42,
        }
    }
}

// ── Census ────────────────────────────────────────────────────────────────────

/// Per-tick aggregate counts over all agents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub moving:  usize,
    pub turning: usize,
    pub halted:  usize,
    /// Total boxes currently carried across the fleet.
    pub boxes_carried: usize,
}

impl Census {
    /// Count states and cargo across `agents`.
    pub fn take(agents: &[Agent]) -> Self {
        let mut census = Census::default();
        for agent in agents {
            match agent.state() {
                LocomotionState::Moving  => census.moving += 1,
                LocomotionState::Turning => census.turning += 1,
                LocomotionState::Halted  => census.halted += 1,
            }
            census.boxes_carried += agent.cargo().len();
        }
        census
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Holds the global countdown and every agent; drives the two-phase tick
/// (countdown first, then agents) and accepts synchronous event dispatch
/// from the external collision detector.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration.
    pub config: SimConfig,

    /// The process-wide countdown.  All agents observe its `stopped` flag;
    /// only the tick loop writes it.
    pub countdown: CountdownClock,

    /// All robot agents, indexed by `AgentId`.
    pub agents: Vec<Agent>,

    /// Completed effective ticks (frozen ticks are not counted).
    pub ticks: u64,
}

impl Sim {
    // ── Tick drivers ──────────────────────────────────────────────────────

    /// Advance the whole simulation by one frame of `dt` seconds.
    ///
    /// The countdown advances first; on the tick it reaches its limit the
    /// agents are *not* advanced (expiry freezes the frame), and every later
    /// call is a frozen no-op.  Returns `false` once frozen.
    ///
    /// `dt` must be positive.
    pub fn tick<O: SimObserver>(&mut self, dt: f32, observer: &mut O) -> bool {
        debug_assert!(dt > 0.0 && dt.is_finite(), "tick dt must be positive, got {dt}");
        if self.countdown.stopped() {
            return false;
        }

        observer.on_tick_start(self.ticks, self.countdown.elapsed());

        if self.countdown.advance(dt) {
            // Expiry tick: signal once, freeze before any agent moves.
            observer.on_countdown_expired(self.countdown.elapsed());
        } else {
            for agent in &mut self.agents {
                agent.advance(dt);
            }
        }

        observer.on_tick_end(self.ticks, self.countdown.elapsed(), &self.agents);
        if self.config.snapshot_interval_ticks > 0
            && self.ticks.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(self.ticks, self.countdown.elapsed(), &self.agents);
        }

        self.ticks += 1;
        true
    }

    /// Run at most `n` frames of `dt` seconds each, stopping early if the
    /// countdown expires.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, dt: f32, observer: &mut O) {
        for _ in 0..n {
            if !self.tick(dt, observer) {
                break;
            }
        }
    }

    /// Run frames of `dt` seconds until the countdown freezes the
    /// simulation, then emit `on_sim_end`.
    pub fn run_until_stopped<O: SimObserver>(&mut self, dt: f32, observer: &mut O) {
        while self.tick(dt, observer) {}
        observer.on_sim_end(self.ticks);
    }

    // ── Event intake (external collision detector) ────────────────────────

    /// Dispatch a collision-enter event to `agent`'s reaction policy.
    ///
    /// Frozen no-op after countdown expiry.  Unknown agents are an error —
    /// the collaborator referenced something this simulation never spawned.
    pub fn on_collision(&mut self, agent: AgentId, category: CollisionCategory) -> SimResult<()> {
        if self.countdown.stopped() {
            return Ok(());
        }
        self.agent_mut(agent)?.on_collision(category);
        Ok(())
    }

    /// Dispatch a payload-contact event: `agent` tries to stack `payload`.
    ///
    /// Returns the occupied carry slot, or `None` when the agent's stack is
    /// full (or the simulation is frozen).  The collaborator must deliver
    /// each payload at most once — see `wb_agent::CargoStack`.
    pub fn on_payload_contact(
        &mut self,
        agent:   AgentId,
        payload: PayloadId,
    ) -> SimResult<Option<CarrySlot>> {
        if self.countdown.stopped() {
            return Ok(None);
        }
        Ok(self.agent_mut(agent)?.try_attach(payload))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Immutable access to one agent.
    pub fn agent(&self, agent: AgentId) -> SimResult<&Agent> {
        self.agents
            .get(agent.index())
            .ok_or(SimError::AgentNotFound(agent))
    }

    /// Aggregate state counts for the current tick.
    pub fn census(&self) -> Census {
        Census::take(&self.agents)
    }

    fn agent_mut(&mut self, agent: AgentId) -> SimResult<&mut Agent> {
        self.agents
            .get_mut(agent.index())
            .ok_or(SimError::AgentNotFound(agent))
    }
}
