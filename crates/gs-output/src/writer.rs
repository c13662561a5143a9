//! The `OutputWriter` trait implemented by backend writers.

use crate::{CustomerSnapshotRow, OutputResult, TickSummaryRow};

/// Sink for snapshot and summary rows.
///
/// [`SimOutputObserver`][crate::SimOutputObserver] keeps the first error a
/// writer returns; read it back with
/// [`take_error`][crate::SimOutputObserver::take_error] after the run.
pub trait OutputWriter {
    /// Write a batch of customer snapshots.
    fn write_snapshots(&mut self, rows: &[CustomerSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Calls after the first are no-ops.
    fn finish(&mut self) -> OutputResult<()>;
}
