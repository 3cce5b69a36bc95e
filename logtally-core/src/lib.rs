//! Access-log tallying.
//!
//! Lines flow through a fixed pipeline:
//!
//! stdin
//! parse_line
//! LogRecord
//! MetricsState
//! render
//! stdout
//!
//! A [`Monitor`] owns the metrics for the whole run and prints a snapshot
//! every [`REPORT_EVERY`] lines and once more when the stream ends.

pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod monitor;
pub mod parse;
pub mod record;
pub mod report;

pub use constants::{LINE_QUEUE_DEPTH, REPORT_EVERY, SENTINEL_STATUS, TRACKED_STATUS_CODES};
pub use error::MonitorError;
pub use input::{InputEvent, StopSignal, spawn_stdin_reader};
pub use metrics::MetricsState;
pub use monitor::{Monitor, RunSummary, StopReason, run_events, run_stream};
pub use parse::{AccessLine, parse_access_line, parse_line};
pub use record::LogRecord;
pub use report::{render, render_to_string};
