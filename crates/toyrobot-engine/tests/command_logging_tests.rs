// Boundary logging emitted by the engine for each command

use toyrobot_core::logging_facility::test_capture::init_test_capture;
use toyrobot_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use toyrobot_engine::{RobotService, TableService};
use toyrobot_store::MemoryStore;

#[test]
fn test_successful_command_logs_start_and_end() {
    let capture = init_test_capture();
    let store = MemoryStore::new();
    TableService::new(&store).create_table("5", "5");

    let outcome = RobotService::new(&store).place("1,1,NORTH");
    assert!(outcome.is_success());

    let events = capture.events_for_request(outcome.request_id.as_str());
    let kinds: Vec<_> = events.iter().filter_map(|e| e.event()).collect();
    assert_eq!(kinds, vec![EVENT_START, EVENT_END]);
    assert!(events.iter().all(|e| e.op() == Some("robot_place")));
    assert!(events[1].duration_ms().is_some());
}

#[test]
fn test_rejected_command_logs_error_code() {
    let capture = init_test_capture();
    let store = MemoryStore::new();

    let outcome = RobotService::new(&store).report();
    assert!(outcome.is_failure());

    let events = capture.events_for_request(outcome.request_id.as_str());
    assert_eq!(events.len(), 2);

    let end = &events[1];
    assert_eq!(end.event(), Some(EVENT_END_ERROR));
    assert_eq!(end.op(), Some("robot_report"));
    assert_eq!(end.err_code(), Some("ERR_NOT_FOUND"));
    assert_eq!(end.err_kind(), Some("NotFound"));
    assert!(end.duration_ms().is_some());
}

#[test]
fn test_rejected_move_is_classified_out_of_bounds() {
    let capture = init_test_capture();
    let store = MemoryStore::new();
    TableService::new(&store).create_table("0", "0");
    RobotService::new(&store).place("0,0,EAST");

    let outcome = RobotService::new(&store).move_forward();

    let events = capture.events_for_request(outcome.request_id.as_str());
    let end = events
        .iter()
        .find(|e| e.event() == Some(EVENT_END_ERROR))
        .expect("end_error event");
    assert_eq!(end.err_code(), Some("ERR_OUT_OF_BOUNDS"));
    assert_eq!(end.err_kind(), Some("OutOfBounds"));
}

#[test]
fn test_each_command_gets_its_own_request_id() {
    let _capture = init_test_capture();
    let store = MemoryStore::new();
    let robot = RobotService::new(&store);

    let first = robot.report();
    let second = robot.report();
    assert_ne!(first.request_id, second.request_id);
}
