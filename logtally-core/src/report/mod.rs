
use crate::metrics::MetricsState;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Formats a snapshot of `state`.
///
/// ```text
/// File size: <total>
/// <code>: <count>
/// ```
///
/// One code line per tracked code with a non-zero count, in ascending order.
pub fn render_to_string(state: &MetricsState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "File size: {}", state.total_file_size());
    for (code, count) in state.status_counts() {
        if count > 0 {
            let _ = writeln!(out, "{code}: {count}");
        }
    }

    out
}

/// Writes a snapshot of `state` in one piece and flushes it.
pub fn render<W: Write + ?Sized>(state: &MetricsState, out: &mut W) -> io::Result<()> {
    out.write_all(render_to_string(state).as_bytes())?;
    out.flush()
}
