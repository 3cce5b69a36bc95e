use integration_tests::harness::LineBuilder;
use logtally_core::{InputEvent, LINE_QUEUE_DEPTH, StopReason, StopSignal, run_events};
use pretty_assertions::assert_eq;
use std::sync::mpsc;
use std::thread;

#[test]
fn interrupt_event_from_another_thread_flushes_once() {
    // Arrange
    let builder = LineBuilder::new();
    let (tx, rx) = mpsc::channel();
    let interrupt = tx.clone();

    let producer = thread::spawn(move || {
        for _ in 0..23 {
            tx.send(InputEvent::Line(builder.line("500", 2))).unwrap();
        }
        interrupt.send(InputEvent::Interrupt).unwrap();
        let _ = tx.send(InputEvent::Line(builder.line("500", 2)));
    });
    producer.join().unwrap();
    let mut out = Vec::new();

    // Act
    let summary = run_events(&rx, &StopSignal::new(), &mut out).unwrap();

    // Assert
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "File size: 20\n500: 10\n\
         File size: 40\n500: 20\n\
         File size: 46\n500: 23\n"
    );
    assert_eq!(summary.reason, StopReason::Interrupted);
}

#[test]
fn stop_request_wins_over_a_full_queue() {
    // Arrange
    let builder = LineBuilder::new();
    let (tx, rx) = mpsc::sync_channel(LINE_QUEUE_DEPTH);
    for _ in 0..LINE_QUEUE_DEPTH {
        tx.send(InputEvent::Line(builder.line("200", 1))).unwrap();
    }
    let stop = StopSignal::new();
    let handler_stop = stop.clone();

    // Same steps as the Ctrl-C handler: flag first, then a wake-up that may not fit.
    thread::spawn(move || {
        handler_stop.request();
        let _ = tx.try_send(InputEvent::Interrupt);
    })
    .join()
    .unwrap();
    let mut out = Vec::new();

    // Act
    let summary = run_events(&rx, &stop, &mut out).unwrap();

    // Assert
    assert_eq!(String::from_utf8(out).unwrap(), "File size: 0\n");
    assert_eq!(summary.lines, 0);
    assert_eq!(summary.reason, StopReason::Interrupted);
}

#[test]
fn interrupt_before_any_line_prints_zero_total() {
    // Arrange
    let (tx, rx) = mpsc::channel();
    tx.send(InputEvent::Interrupt).unwrap();
    let mut out = Vec::new();

    // Act
    let summary = run_events(&rx, &StopSignal::new(), &mut out).unwrap();

    // Assert
    assert_eq!(String::from_utf8(out).unwrap(), "File size: 0\n");
    assert_eq!(summary.lines, 0);
}
