use super::cadence_tests::access_line;
use crate::input::{InputEvent, StopSignal, forward_lines};
use crate::monitor::{StopReason, run_events};
use pretty_assertions::assert_eq;
use std::io::{self, Cursor, Write};
use std::sync::mpsc;

#[test]
fn interrupt_event_stops_with_one_final_snapshot() {
    // Arrange
    let (tx, rx) = mpsc::channel();
    for _ in 0..12 {
        tx.send(InputEvent::Line(access_line("200", 5))).unwrap();
    }
    tx.send(InputEvent::Interrupt).unwrap();
    tx.send(InputEvent::Line(access_line("200", 5))).unwrap();
    let mut out = Vec::new();

    // Act
    let summary = run_events(&rx, &StopSignal::new(), &mut out).unwrap();

    // Assert
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "File size: 50\n200: 10\nFile size: 60\n200: 12\n"
    );
    assert_eq!(summary.reason, StopReason::Interrupted);
    assert_eq!(summary.lines, 12);
}

/// Output sink that requests a stop as soon as the first snapshot lands.
struct StopAfterFirstSnapshot {
    written: Vec<u8>,
    stop: StopSignal,
}

impl Write for StopAfterFirstSnapshot {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        self.stop.request();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn stop_request_skips_lines_already_queued() {
    // Arrange
    let (tx, rx) = mpsc::sync_channel(64);
    for _ in 0..40 {
        tx.send(InputEvent::Line(access_line("200", 5))).unwrap();
    }
    // The wake-up lands behind every queued line, as it does from a signal handler.
    tx.send(InputEvent::Interrupt).unwrap();
    let stop = StopSignal::new();
    let mut out = StopAfterFirstSnapshot {
        written: Vec::new(),
        stop: stop.clone(),
    };

    // Act
    let summary = run_events(&rx, &stop, &mut out).unwrap();

    // Assert
    assert_eq!(
        String::from_utf8(out.written).unwrap(),
        "File size: 50\n200: 10\nFile size: 50\n200: 10\n"
    );
    assert_eq!(summary.reason, StopReason::Interrupted);
    assert_eq!(summary.lines, 10);
}

#[test]
fn stop_requested_before_start_processes_nothing() {
    // Arrange
    let (tx, rx) = mpsc::sync_channel(4);
    tx.send(InputEvent::Line(access_line("200", 5))).unwrap();
    let stop = StopSignal::new();
    stop.request();
    let mut out = Vec::new();

    // Act
    let summary = run_events(&rx, &stop, &mut out).unwrap();

    // Assert
    assert_eq!(String::from_utf8(out).unwrap(), "File size: 0\n");
    assert_eq!(summary.lines, 0);
    assert_eq!(summary.reason, StopReason::Interrupted);
}

#[test]
fn eof_event_ends_the_run() {
    // Arrange
    let (tx, rx) = mpsc::channel();
    tx.send(InputEvent::Line(access_line("401", 8))).unwrap();
    tx.send(InputEvent::Eof).unwrap();
    let mut out = Vec::new();

    // Act
    let summary = run_events(&rx, &StopSignal::new(), &mut out).unwrap();

    // Assert
    assert_eq!(String::from_utf8(out).unwrap(), "File size: 8\n401: 1\n");
    assert_eq!(summary.reason, StopReason::EndOfInput);
}

#[test]
fn dropped_senders_count_as_end_of_input() {
    // Arrange
    let (tx, rx) = mpsc::channel();
    tx.send(InputEvent::Line(access_line("500", 1))).unwrap();
    drop(tx);
    let mut out = Vec::new();

    // Act
    let summary = run_events(&rx, &StopSignal::new(), &mut out).unwrap();

    // Assert
    assert_eq!(String::from_utf8(out).unwrap(), "File size: 1\n500: 1\n");
    assert_eq!(summary.reason, StopReason::EndOfInput);
}

#[test]
fn forwarded_reader_feeds_the_loop() {
    // Arrange
    let text: String = (0..10)
        .map(|_| format!("{}\n", access_line("200", 2)))
        .collect();
    let (tx, rx) = mpsc::sync_channel(16);
    forward_lines(Cursor::new(text.into_bytes()), &tx);
    let mut out = Vec::new();

    // Act
    let summary = run_events(&rx, &StopSignal::new(), &mut out).unwrap();

    // Assert
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "File size: 20\n200: 10\nFile size: 20\n200: 10\n"
    );
    assert_eq!(summary.lines, 10);
}

#[test]
fn forward_lines_ends_with_eof() {
    // Arrange
    let (tx, rx) = mpsc::sync_channel(8);

    // Act
    forward_lines(Cursor::new(b"a\nb\r\n".to_vec()), &tx);
    drop(tx);

    // Assert
    let events: Vec<InputEvent> = rx.iter().collect();
    assert_eq!(
        events,
        vec![
            InputEvent::Line("a".into()),
            InputEvent::Line("b\r".into()),
            InputEvent::Eof,
        ]
    );
}
