use toyrobot_core::errors::{ExError, ExErrorKind, RobotError};
use toyrobot_core::{Axis, Violations};

#[test]
fn test_violation_kinds() {
    let cases = [
        (RobotError::MissingPlacementValue, ExErrorKind::InvalidInput),
        (
            RobotError::NonIntegerCoordinate {
                received: "abc".to_string(),
            },
            ExErrorKind::InvalidInput,
        ),
        (
            RobotError::InvalidDirection {
                received: "UP".to_string(),
            },
            ExErrorKind::InvalidDirection,
        ),
        (RobotError::FacingEdge, ExErrorKind::OutOfBounds),
        (
            RobotError::MaxCoordinateNegative { axis: Axis::Y },
            ExErrorKind::InvalidBounds,
        ),
        (RobotError::TableNotCreated, ExErrorKind::NotFound),
    ];

    for (err, kind) in cases {
        assert_eq!(err.kind(), kind, "wrong kind for {:?}", err);
    }
}

#[test]
fn test_violations_convert_with_first_kind_and_all_messages() {
    let violations = Violations::single(RobotError::CoordinateAboveMaximum {
        axis: Axis::X,
        max: 5,
        received: 6,
    })
    .prepend(RobotError::InvalidDirection {
        received: "up".to_string(),
    });

    let ex: ExError = violations.into();

    assert_eq!(ex.kind(), ExErrorKind::InvalidDirection);
    assert_eq!(ex.code(), "ERR_INVALID_DIRECTION");
    assert_eq!(
        ex.message(),
        "Direction must be one of NORTH, SOUTH, EAST, WEST, but received up\n\
         The x-coordinate must be less than or equal to 5, but received '6'"
    );
}

#[test]
fn test_serde_error_is_serialization_kind() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::Serialization);
}

#[test]
fn test_missing_placement_message() {
    assert_eq!(
        RobotError::MissingPlacementValue.to_string(),
        "Must include all 3 placement values, separated by commas (e.g. 2,3,NORTH)"
    );
}
