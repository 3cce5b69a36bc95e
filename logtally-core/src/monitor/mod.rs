//! The driving loop.
//!
//! A [`Monitor`] is RUNNING from construction until [`Monitor::finish`]
//! consumes it. While running, every [`REPORT_EVERY`]th line triggers a
//! snapshot; `finish` emits the last one.

#[cfg(test)]
mod tests;

use crate::constants::REPORT_EVERY;
use crate::error::MonitorError;
use crate::input::{InputEvent, StopSignal, next_line};
use crate::metrics::MetricsState;
use crate::parse::parse_access_line;
use crate::record::LogRecord;
use crate::report::render;
use std::io::{BufRead, Write};
use std::sync::mpsc::Receiver;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndOfInput,
    Interrupted,
}

impl StopReason {
    pub fn as_str(self) -> &'static str {
        match self {
            StopReason::EndOfInput => "end_of_input",
            StopReason::Interrupted => "interrupted",
        }
    }
}

/// What a finished run processed. Never printed to the metrics output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: u64,
    pub malformed: u64,
    pub total_file_size: u64,
    pub reason: StopReason,
}

#[derive(Debug, Default)]
pub struct Monitor {
    metrics: MetricsState,
    lines: u64,
    malformed: u64,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metrics(&self) -> &MetricsState {
        &self.metrics
    }

    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn malformed(&self) -> u64 {
        self.malformed
    }

    /// Parses and folds one line. Returns `true` if a snapshot was written.
    pub fn process_line<W: Write + ?Sized>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> Result<bool, MonitorError> {
        let record = match parse_access_line(line) {
            Some(access) => LogRecord::from(access),
            None => {
                self.malformed += 1;
                tracing::debug!(line = self.lines + 1, "line does not match access-log format");
                LogRecord::sentinel()
            }
        };

        self.metrics.update(&record);
        self.lines += 1;

        if self.lines % REPORT_EVERY != 0 {
            return Ok(false);
        }

        render(&self.metrics, out)?;
        tracing::trace!(lines = self.lines, "snapshot written");
        Ok(true)
    }

    /// Writes the final snapshot and ends the run.
    pub fn finish<W: Write + ?Sized>(
        self,
        out: &mut W,
        reason: StopReason,
    ) -> Result<RunSummary, MonitorError> {
        render(&self.metrics, out)?;

        let summary = RunSummary {
            lines: self.lines,
            malformed: self.malformed,
            total_file_size: self.metrics.total_file_size(),
            reason,
        };
        tracing::info!(
            lines = summary.lines,
            malformed = summary.malformed,
            total_file_size = summary.total_file_size,
            reason = reason.as_str(),
            "stream finished"
        );

        Ok(summary)
    }
}

/// Runs a whole stream synchronously until end of input.
///
/// A read error ends the stream the same way end of input does.
pub fn run_stream<R: BufRead, W: Write + ?Sized>(
    mut reader: R,
    out: &mut W,
) -> Result<RunSummary, MonitorError> {
    let mut monitor = Monitor::new();
    let mut buf = Vec::new();

    loop {
        match next_line(&mut reader, &mut buf) {
            Ok(Some(line)) => {
                monitor.process_line(&line, out)?;
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input, treating as end of input");
                break;
            }
        }
    }

    monitor.finish(out, StopReason::EndOfInput)
}

/// Runs until [`InputEvent::Eof`] arrives or `stop` is requested.
///
/// `stop` is checked after every receive, so lines still queued when a stop
/// is requested are dropped. A channel whose senders are all gone counts as
/// end of input.
pub fn run_events<W: Write + ?Sized>(
    rx: &Receiver<InputEvent>,
    stop: &StopSignal,
    out: &mut W,
) -> Result<RunSummary, MonitorError> {
    let mut monitor = Monitor::new();

    let reason = loop {
        let event = rx.recv();
        if stop.is_requested() {
            break StopReason::Interrupted;
        }

        match event {
            Ok(InputEvent::Line(line)) => {
                monitor.process_line(&line, out)?;
            }
            Ok(InputEvent::Interrupt) => break StopReason::Interrupted,
            Ok(InputEvent::Eof) | Err(_) => break StopReason::EndOfInput,
        }
    };

    monitor.finish(out, reason)
}
