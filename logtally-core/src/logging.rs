use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Initialize diagnostics logging on stderr with environment-based filtering
///
/// stdout carries the stats snapshots, so nothing here may write to it.
/// - `RUST_LOG` wins when set; otherwise `default_level` is used
/// - `Json` flattens event fields for cleaner log output
pub fn init_logging(format: LogFormat, default_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Pretty => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}
