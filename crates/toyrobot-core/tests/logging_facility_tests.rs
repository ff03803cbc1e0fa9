#![allow(clippy::unwrap_used, clippy::expect_used)]

use toyrobot_core::errors::RobotError;
use toyrobot_core::logging_facility::test_capture::init_test_capture;
use toyrobot_core::{log_op_end, log_op_error, log_op_start};
use toyrobot_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op() == Some(op_name) && e.event() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, RobotError::RobotNotPlaced, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op() == Some(op_name) && e.event() == Some(EVENT_END_ERROR))
        .expect("error event");

    assert_eq!(error_event.field("err_code"), Some("ERR_NOT_FOUND"));
    assert_eq!(error_event.field("err_kind"), Some("NotFound"));
}

#[test]
fn test_request_id_field_is_captured() {
    let capture = init_test_capture();
    let op_name = "test_request_id_unique_4";

    log_op_start!(op_name, request_id = "req-unique-4");
    log_op_end!(op_name, duration_ms = 1, request_id = "req-unique-4");

    let events = capture.events_for_request("req-unique-4");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event(), Some(EVENT_START));
    assert_eq!(events[1].event(), Some(EVENT_END));
}
