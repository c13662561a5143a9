//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `customer_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{CustomerSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

pub const SNAPSHOT_FILE: &str = "customer_snapshots.csv";
pub const SUMMARY_FILE: &str = "tick_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record([
            "agent_id", "tick", "x", "z", "state", "mood",
            "items_collected", "items_needed", "lane", "queue_index", "has_basket",
        ])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record([
            "tick", "time_secs", "get_basket", "shopping", "queueing", "checking_out",
            "exiting", "busy_lanes", "baskets_available", "mean_mood", "items_found",
            "checkouts", "escapes",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[CustomerSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.z),
                row.state.to_string(),
                format!("{:.2}", row.mood),
                row.items_collected.to_string(),
                row.items_needed.to_string(),
                row.lane.to_string(),
                row.queue_index.map(|i| i.to_string()).unwrap_or_default(),
                (row.has_basket as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.time_secs),
            row.get_basket.to_string(),
            row.shopping.to_string(),
            row.queueing.to_string(),
            row.checking_out.to_string(),
            row.exiting.to_string(),
            row.busy_lanes.to_string(),
            row.baskets_available.to_string(),
            format!("{:.2}", row.mean_mood),
            row.items_found.to_string(),
            row.checkouts.to_string(),
            row.escapes.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
