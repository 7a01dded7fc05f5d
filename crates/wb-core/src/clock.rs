//! Global countdown clock.
//!
//! # Design
//!
//! The simulation is bounded by a single countdown: elapsed simulated seconds
//! accumulate tick by tick until a configured limit, at which point the clock
//! becomes permanently `stopped`.  Stopping is terminal — the flag never
//! reverts and `elapsed` is frozen thereafter.
//!
//! The clock is plain owned state injected into the tick loop (not an ambient
//! global), so tests can run any number of independent instances.  All agents
//! observe the same `stopped` flag but only [`CountdownClock::advance`]
//! writes it.

use crate::{CoreError, CoreResult};

/// Default countdown limit in seconds.
pub const DEFAULT_LIMIT_SECS: f32 = 60.0;

// ── Formatting ────────────────────────────────────────────────────────────────

/// Render a second count as `MM:SS`, both fields zero-padded to two digits.
///
/// Minutes are unbounded (not wrapped to hours): `3600.0` renders as
/// `"60:00"`.  Seconds are `floor(secs) mod 60`, minutes `floor(secs / 60)`,
/// so `3599.9` renders as `"59:59"`.  Negative inputs clamp to `"00:00"`.
pub fn format_mm_ss(secs: f32) -> String {
    let whole = secs.max(0.0).floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

// ── CountdownClock ────────────────────────────────────────────────────────────

/// Elapsed-time accumulator that stops permanently once a limit is reached.
///
/// Callers must advance the clock *before* any per-agent work each tick and
/// short-circuit all agent advancement while [`stopped`][Self::stopped] is
/// `true` — a stopped clock freezes delta time for the whole simulation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountdownClock {
    elapsed: f32,
    limit:   f32,
    stopped: bool,
}

impl CountdownClock {
    /// Create a clock that stops once `limit_secs` have accumulated.
    ///
    /// Fails with [`CoreError::InvalidLimit`] unless `limit_secs` is positive
    /// and finite.
    pub fn new(limit_secs: f32) -> CoreResult<Self> {
        if !limit_secs.is_finite() || limit_secs <= 0.0 {
            return Err(CoreError::InvalidLimit(limit_secs));
        }
        Ok(Self { elapsed: 0.0, limit: limit_secs, stopped: false })
    }

    /// Accumulate `dt` seconds.  No-op once stopped.
    ///
    /// Returns `true` exactly once: on the tick where `elapsed` crosses the
    /// limit and the clock transitions to stopped.  This is the "simulation
    /// halted" signal; every later call returns `false`.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.stopped {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.limit {
            self.stopped = true;
            return true;
        }
        false
    }

    /// Elapsed simulated seconds (frozen once stopped).
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The configured limit in seconds.
    #[inline]
    pub fn limit(&self) -> f32 {
        self.limit
    }

    /// `true` once the limit has been reached.  Terminal — never reverts.
    #[inline]
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Elapsed time rendered as `MM:SS` for the display collaborator.
    #[inline]
    pub fn formatted(&self) -> String {
        format_mm_ss(self.elapsed)
    }
}

impl Default for CountdownClock {
    fn default() -> Self {
        // DEFAULT_LIMIT_SECS is known-valid.
        Self { elapsed: 0.0, limit: DEFAULT_LIMIT_SECS, stopped: false }
    }
}

impl std::fmt::Display for CountdownClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            self.formatted(),
            if self.stopped { " (stopped)" } else { "" }
        )
    }
}
