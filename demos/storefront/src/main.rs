//! `storefront` — headless run of the default grocery store.
//!
//! Eight shoppers loop through basket pickup, aisle browsing, the checkout
//! queue, and the exit while three workers hover beside the tills.  Per-tick
//! summaries and periodic customer snapshots go to CSV; the stats board and
//! the session summary are printed when the run ends.
//!
//! Run with:
//!   cargo run -p storefront --release -- [config.json] [output-dir]
//!
//! Any field missing from the config file keeps its default.  Set
//! `RUST_LOG=debug` to see per-customer lifecycle events.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gs_behavior::{BehaviorTuning, WorkerAnimator};
use gs_core::SimConfig;
use gs_output::{CsvWriter, SessionSummary, SimOutputObserver, StatsBoard};
use gs_sim::SimBuilder;
use gs_spatial::{ObstacleIndex, StoreLayout};

const DEFAULT_OUTPUT_DIR: &str = "output/storefront";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoreConfig {
    sim:     SimConfig,
    tuning:  BehaviorTuning,
    workers: WorkerAnimator,
}

fn load_config(path: Option<&Path>) -> Result<StoreConfig> {
    let Some(path) = path else {
        return Ok(StoreConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let StoreConfig { sim: config, tuning, workers } = load_config(config_path.as_deref())?;
    info!(
        seed = config.seed,
        customers = config.customer_count,
        workers = config.worker_count,
        ticks = config.total_ticks,
        "storefront starting"
    );

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    // ── Build ─────────────────────────────────────────────────────────────────

    let layout = StoreLayout::grocery();
    let probe = ObstacleIndex::new(&layout.obstacles);
    let seed = config.seed;
    let mut sim = SimBuilder::new(config, layout, probe)
        .tuning(tuning)
        .workers(workers)
        .build()?;

    // ── Run ───────────────────────────────────────────────────────────────────

    let mut csv = SimOutputObserver::new(CsvWriter::new(&output_dir)?);
    let mut board = StatsBoard::new(seed);

    let started = Instant::now();
    sim.run(&mut (&mut csv, &mut board));
    if let Some(e) = csv.take_error() {
        return Err(e).context("writing CSV output");
    }
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        output = %output_dir.display(),
        "run complete"
    );

    // ── Report ────────────────────────────────────────────────────────────────

    println!("{board}");
    let session = SessionSummary::from_board(&board, chrono::Utc::now()).to_json()?;
    info!(summary = %session, "session summary");
    println!("{session}");

    Ok(())
}
