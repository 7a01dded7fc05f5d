//! Integration tests for wb-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            tick,
            x: agent_id as f32,
            y: 0.0,
            z: -1.5,
            yaw_degrees: 90.0,
            state: "moving",
            boxes: 2,
            odometer_m: 12.5,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            clock: "00:01".to_string(),
            elapsed_secs: tick as f32 * 0.1,
            moving: 3,
            turning: 1,
            halted: 0,
            boxes_carried: 4,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["agent_id", "tick", "x", "y", "z", "yaw_degrees", "state", "boxes", "odometer_m"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["tick", "clock", "elapsed_secs", "moving", "turning", "halted", "boxes_carried"]
        );
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][6], "moving");
        assert_eq!(&rows[1][0], "1");
    }

    #[test]
    fn csv_summary_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "00:01");
        assert_eq!(&rows[0][6], "4");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use glam::{Quat, Vec3};
    use tempfile::TempDir;

    use wb_agent::AgentConfig;
    use wb_sim::{SimBuilder, SimConfig};

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn full_run_produces_rows() {
        let dir = tmp();
        let config = SimConfig {
            countdown_limit_secs: 1.0,
            snapshot_interval_ticks: 1,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(config)
            .spawn(AgentConfig::default(), Vec3::ZERO, Quat::IDENTITY)
            .build()
            .unwrap();

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run_until_stopped(0.25, &mut obs);
        assert!(obs.take_error().is_none());

        // 4 effective ticks (0.25 × 4 = 1.0, the last one is the expiry tick).
        let mut summaries = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.records().count(), 4);

        let mut snaps = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(snaps.records().count(), 4); // one agent, every tick
    }
}
