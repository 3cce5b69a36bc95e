use clap::{Parser, ValueEnum};
use logtally_core::logging::{LogFormat, default_log_format};

#[derive(Parser, Debug)]
#[command(
    name = "logtally",
    version,
    about = "Tally HTTP access-log lines from stdin: total bytes and per-status counts"
)]
pub struct Cli {
    /// Diagnostics format on stderr (default: pretty on a terminal, json otherwise)
    #[arg(long, value_enum)]
    log_format: Option<LogFormatArg>,

    /// Only log errors on stderr (RUST_LOG still wins)
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Pretty,
}

impl Cli {
    pub fn log_format(&self) -> LogFormat {
        match self.log_format {
            Some(LogFormatArg::Json) => LogFormat::Json,
            Some(LogFormatArg::Pretty) => LogFormat::Pretty,
            None => default_log_format(),
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.quiet { "error" } else { "warn" }
    }
}
