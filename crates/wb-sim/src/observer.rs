//! Simulation observer trait for progress reporting and data collection.

use wb_agent::Agent;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: u64, elapsed: f32, _agents: &[Agent]) {
///         if tick % self.interval == 0 {
///             println!("tick {tick}: {elapsed:.1} s elapsed");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each effective tick, before the countdown
    /// advances.  Not called once the simulation is frozen.
    fn on_tick_start(&mut self, _tick: u64, _elapsed_secs: f32) {}

    /// Called at the end of each effective tick with read-only agent state.
    fn on_tick_end(&mut self, _tick: u64, _elapsed_secs: f32, _agents: &[Agent]) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks) with read-only agent state, so output writers can record
    /// positions without the sim knowing about any particular format.
    fn on_snapshot(&mut self, _tick: u64, _elapsed_secs: f32, _agents: &[Agent]) {}

    /// Called exactly once, on the tick where the countdown reaches its
    /// limit and freezes the simulation.
    fn on_countdown_expired(&mut self, _elapsed_secs: f32) {}

    /// Called once when a run driver finishes.
    fn on_sim_end(&mut self, _final_tick: u64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to drive the sim
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
