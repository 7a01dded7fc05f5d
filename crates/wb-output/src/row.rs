//! Plain data row types written by output backends.

/// A snapshot of one agent's pose and cargo at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    /// World position, metres.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Heading about the vertical axis, degrees.
    pub yaw_degrees: f32,
    /// Locomotion state label (`moving` / `turning` / `halted`).
    pub state: &'static str,
    /// Boxes currently carried.
    pub boxes: usize,
    /// Total distance travelled since spawn, metres.
    pub odometer_m: f32,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummaryRow {
    pub tick: u64,
    /// Countdown clock rendered as `MM:SS`.
    pub clock: String,
    pub elapsed_secs: f32,
    pub moving:  usize,
    pub turning: usize,
    pub halted:  usize,
    /// Total boxes carried across the fleet.
    pub boxes_carried: usize,
}
