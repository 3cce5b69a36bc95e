use std::io::{self, BufRead};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::SyncSender;
use std::thread::{self, JoinHandle};

/// Everything the driving loop can be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// Input ended, either cleanly or because it could no longer be read.
    Eof,
    /// Wakes the loop after a stop was requested on its [`StopSignal`].
    Interrupt,
}

/// Stop request shared between the Ctrl-C handler and the driving loop.
///
/// The loop checks it before every line, so a stop is honored even when
/// lines are already queued ahead of the [`InputEvent::Interrupt`].
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    requested: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

/// Reads the next line without its terminator.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so such
/// a line simply fails to parse later on.
pub fn next_line<R: BufRead + ?Sized>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Forwards every line of `reader` to `tx`, then [`InputEvent::Eof`].
///
/// Blocks while the queue is full. Stops early if the receiving side has gone away.
pub fn forward_lines<R: BufRead>(mut reader: R, tx: &SyncSender<InputEvent>) {
    let mut buf = Vec::new();

    loop {
        let event = match next_line(&mut reader, &mut buf) {
            Ok(Some(line)) => InputEvent::Line(line),
            Ok(None) => InputEvent::Eof,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input, treating as end of input");
                InputEvent::Eof
            }
        };

        let done = event == InputEvent::Eof;
        if tx.send(event).is_err() || done {
            break;
        }
    }
}

/// Spawns the thread that turns stdin into [`InputEvent`]s.
///
/// The thread may stay blocked on stdin after the loop has stopped; it is not
/// meant to be joined.
pub fn spawn_stdin_reader(tx: SyncSender<InputEvent>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            let stdin = io::stdin();
            forward_lines(stdin.lock(), &tx);
            tracing::debug!("stdin reader finished");
        })
}
