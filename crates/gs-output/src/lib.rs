//! `gs-output` — headless presentation layers for the grocery simulation.
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`csv`]     | `CsvWriter`: `customer_snapshots.csv`, `tick_summaries.csv` |
//! | [`observer`]| `SimOutputObserver<W>`, drives any [`OutputWriter`]        |
//! | [`stats`]   | `StatsBoard`, per-customer time, budget, items, and mood   |
//! | [`session`] | `SessionSummary`, the end-of-run aggregate as JSON         |
//!
//! Every type here is a [`gs_sim::SimObserver`] or is built from one, so
//! they compose as observer pairs:
//!
//! ```rust,ignore
//! use gs_output::{CsvWriter, SessionSummary, SimOutputObserver, StatsBoard};
//!
//! let mut csv = SimOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! let mut board = StatsBoard::new(config.seed);
//! sim.run(&mut (&mut csv, &mut board));
//! if let Some(e) = csv.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! println!("{board}");
//! println!("{}", SessionSummary::from_board(&board, chrono::Utc::now()).to_json()?);
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod session;
pub mod stats;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CustomerSnapshotRow, TickSummaryRow};
pub use session::{format_minutes, SessionSummary};
pub use stats::{CustomerStats, StatsBoard};
pub use writer::OutputWriter;
