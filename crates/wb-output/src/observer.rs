//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use glam::EulerRot;

use wb_agent::Agent;
use wb_core::format_mm_ss;
use wb_sim::{Census, SimObserver};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run finishes, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run finishes.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

/// Heading about the vertical axis, degrees.
fn yaw_degrees(agent: &Agent) -> f32 {
    let (yaw, _, _) = agent.orientation().to_euler(EulerRot::YXZ);
    yaw.to_degrees()
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: u64, elapsed_secs: f32, agents: &[Agent]) {
        let census = Census::take(agents);
        let row = TickSummaryRow {
            tick,
            clock: format_mm_ss(elapsed_secs),
            elapsed_secs,
            moving:        census.moving,
            turning:       census.turning,
            halted:        census.halted,
            boxes_carried: census.boxes_carried,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: u64, _elapsed_secs: f32, agents: &[Agent]) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .enumerate()
            .map(|(i, agent)| {
                let position = agent.position();
                AgentSnapshotRow {
                    agent_id:    i as u32,
                    tick,
                    x:           position.x,
                    y:           position.y,
                    z:           position.z,
                    yaw_degrees: yaw_degrees(agent),
                    state:       agent.state().as_str(),
                    boxes:       agent.cargo().len(),
                    odometer_m:  agent.odometer(),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
