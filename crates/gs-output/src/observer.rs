//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use gs_agent::AgentStore;
use gs_behavior::CheckoutLaneRegistry;
use gs_core::Tick;
use gs_sim::{SimObserver, TickSummary};
use tracing::{debug, warn};

use crate::row::{CustomerSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Writes one summary row per tick and one snapshot row per customer every
/// snapshot tick.
///
/// Observer hooks cannot fail, so the first writer error is kept and the
/// rest are only counted.  Check [`take_error`][Self::take_error] once the
/// run returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:      W,
    first_error: Option<OutputError>,
    failures:    u64,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, first_error: None, failures: 0 }
    }

    /// `None` if every write succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.first_error.take()
    }

    /// Writes that failed, including the first.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        let Err(e) = result else { return };
        self.failures += 1;
        if self.first_error.is_none() {
            warn!(error = %e, "output write failed, further failures are counted only");
            self.first_error = Some(e);
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary, _agents: &AgentStore) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, _lanes: &CheckoutLaneRegistry) {
        if agents.customers.is_empty() {
            return;
        }
        let rows: Vec<CustomerSnapshotRow> = agents
            .customers
            .iter()
            .map(|c| CustomerSnapshotRow::new(tick, c))
            .collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
        debug!(%final_tick, failures = self.failures, "output closed");
    }
}
