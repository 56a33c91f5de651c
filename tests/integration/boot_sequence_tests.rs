//! Integration tests: BootSequencer → MockBoard, happy path.

use dinoskull::app::events::AppEvent;
use dinoskull::app::ports::{IndicatorPort, Level};
use dinoskull::app::service::BootSequencer;
use dinoskull::config::BootConfig;
use dinoskull::error::Error;
use dinoskull::fsm::StateId;

use crate::mock_board::{BoardCall, MockBoard, RecordingSink};

fn boot() -> (BootSequencer, MockBoard, RecordingSink) {
    let mut seq = BootSequencer::new(BootConfig::default());
    let mut board = MockBoard::new();
    let mut sink = RecordingSink::new();
    seq.run(&mut board, &mut sink).expect("boot should succeed");
    (seq, board, sink)
}

#[test]
fn console_transcript_is_exact() {
    let (_, board, _) = boot();
    assert_eq!(
        board.lines(),
        vec![
            "",
            "=== Dino Skull Capacitive Sensor ===",
            "Initializing...",
            "Ready! LED flashed 4 times.",
            "Project initialized successfully.",
            "Ready for capacitive sensor implementation.",
        ]
    );
}

#[test]
fn console_opened_at_115200() {
    let (_, board, _) = boot();
    assert_eq!(board.calls[0].call, BoardCall::Open { baud: 115_200 });
}

#[test]
fn level_sequence_is_low_then_four_pulses() {
    let (_, board, _) = boot();
    use Level::{High, Low};
    assert_eq!(
        board.levels(),
        vec![Low, High, Low, High, Low, High, Low, High, Low]
    );
    assert_eq!(board.level(), Low);
}

#[test]
fn init_steps_run_in_order() {
    let (_, board, _) = boot();
    let open = board.position(&BoardCall::Open { baud: 115_200 }).unwrap();
    let settle = board.position(&BoardCall::Delay { ms: 300 }).unwrap();
    let configure = board.position(&BoardCall::ConfigureOutput).unwrap();
    let first_low = board.position(&BoardCall::SetLevel(Level::Low)).unwrap();
    let blank = board.position(&BoardCall::Line(String::new())).unwrap();
    let first_high = board.position(&BoardCall::SetLevel(Level::High)).unwrap();
    let initializing = board
        .position(&BoardCall::Line("Initializing...".into()))
        .unwrap();

    assert!(open < settle);
    assert!(settle < configure);
    assert!(configure < first_low);
    assert!(first_low < blank);
    assert!(initializing < first_high);
}

#[test]
fn banner_waits_for_console_settle() {
    let (_, board, _) = boot();
    assert_eq!(board.calls[0].at_ms, 0);
    let banner = board.line_time("").unwrap();
    assert!(banner >= 300, "banner at {banner} ms");
}

#[test]
fn pulse_timing_matches_schedule() {
    let (_, board, _) = boot();
    assert_eq!(board.level_times(Level::High), vec![300, 700, 1100, 1500]);
    // Initial LOW, then the falling edge of each flash.
    assert_eq!(
        board.level_times(Level::Low),
        vec![300, 500, 900, 1300, 1700]
    );
    assert_eq!(board.line_time("Ready! LED flashed 4 times."), Some(1900));
    assert_eq!(board.now_ms(), 1900);
}

#[test]
fn report_summarises_boot() {
    let (_, board, sink) = boot();
    let report = match sink.events.last() {
        Some(AppEvent::BootComplete(r)) => r.clone(),
        other => panic!("expected BootComplete, got {other:?}"),
    };
    assert_eq!(report.pulses, 4);
    assert_eq!(report.lines_written, 6);
    assert_eq!(report.scheduled_ms, 1900);
    assert_eq!(report.level_trace.as_slice(), board.levels().as_slice());
}

#[test]
fn ends_in_idle_with_events_in_order() {
    let (seq, _, sink) = boot();
    assert_eq!(seq.state(), StateId::Idle);

    assert!(matches!(sink.events[0], AppEvent::Started(StateId::Booting)));
    let pulses: Vec<u8> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::Pulse { index } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(pulses, vec![0, 1, 2, 3]);
    assert!(matches!(
        sink.events[sink.events.len() - 2],
        AppEvent::StateChanged {
            from: StateId::Booting,
            to: StateId::Idle
        }
    ));
}

#[test]
fn second_run_is_rejected_without_touching_board() {
    let (mut seq, mut board, mut sink) = boot();
    let calls_before = board.calls.len();
    let err = seq.run(&mut board, &mut sink).unwrap_err();
    assert!(matches!(err, Error::InvalidState(_)));
    assert_eq!(board.calls.len(), calls_before);
}

#[test]
fn report_serialises_to_json() {
    let (_, _, sink) = boot();
    let Some(AppEvent::BootComplete(report)) = sink.events.last() else {
        panic!("missing BootComplete");
    };
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["pulses"], 4);
    assert_eq!(json["level_trace"][0], "Low");
    assert_eq!(json["level_trace"][1], "High");
}
