//! End-of-session aggregate.
//!
//! Rendered as JSON and logged; nothing is persisted.
//!
//! ```json
//! {
//!   "agents_served": 31,
//!   "average_time": "1m 12s",
//!   "avg_mood": "84%",
//!   "timestamp": "2026-10-16T09:30:00.000Z"
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{OutputResult, StatsBoard};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Checkouts completed.
    pub agents_served: u64,
    /// Mean visit length as `"Xm Ys"`.
    pub average_time:  String,
    /// Mean mood as `"N%"`.
    pub avg_mood:      String,
    /// RFC 3339, UTC, millisecond precision.
    pub timestamp:     String,
}

impl SessionSummary {
    pub fn from_board(board: &StatsBoard, at: DateTime<Utc>) -> Self {
        Self {
            agents_served: board.served(),
            average_time:  format_minutes(board.average_visit_secs()),
            avg_mood:      format!("{}%", board.average_mood().round() as i32),
            timestamp:     at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `"Xm Ys"` with seconds rounded to the nearest whole second.
pub fn format_minutes(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    format!("{}m {}s", total / 60, total % 60)
}
