//! Shared resume result for maneuver tasks.

/// What a task reports after one `resume(dt)` step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaskStatus {
    /// The task has more work; resume it again next tick.
    Active,
    /// The task completed this tick; the owner should drop it.
    Finished,
}

impl TaskStatus {
    /// `true` once the task has completed.
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, TaskStatus::Finished)
    }
}
