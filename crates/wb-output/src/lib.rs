//! `wb-output` — simulation output writers for warebots.
//!
//! A single CSV backend is provided; the [`OutputWriter`] trait keeps other
//! backends addable without touching the observer.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | `AgentSnapshotRow`, `TickSummaryRow` plain data rows   |
//! | [`writer`]   | `OutputWriter` trait                                   |
//! | [`csv`]      | `CsvWriter` — `agent_snapshots.csv`, `tick_summaries.csv` |
//! | [`observer`] | `SimOutputObserver<W>` — `SimObserver` → writer bridge |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use wb_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_until_stopped(0.1, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
