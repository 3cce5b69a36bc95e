mod cli;

use clap::Parser;
use cli::Cli;
use logtally_core::logging::init_logging;
use logtally_core::{InputEvent, LINE_QUEUE_DEPTH, StopSignal, run_events, spawn_stdin_reader};
use std::io;
use std::process::ExitCode;
use std::sync::mpsc;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_format(), cli.log_level()) {
        eprintln!("logtally: {e}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "logtally stopped");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let (tx, rx) = mpsc::sync_channel::<InputEvent>(LINE_QUEUE_DEPTH);
    let stop = StopSignal::new();

    let handler_stop = stop.clone();
    let wake = tx.clone();
    ctrlc::set_handler(move || {
        tracing::info!("interrupt received");
        handler_stop.request();
        // A full queue means the loop is awake and will see the flag anyway.
        let _ = wake.try_send(InputEvent::Interrupt);
    })?;

    spawn_stdin_reader(tx)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_events(&rx, &stop, &mut out)?;

    Ok(())
}
