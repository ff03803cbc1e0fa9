use thiserror::Error;
use toyrobot_core_types::RequestId;

use crate::model::Axis;
use crate::rules::validation::Violations;

/// Result type alias using the canonical structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that tests, logs and the CLI can
/// rely on regardless of the wording of the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input shape
    InvalidInput,
    UnknownCommand,

    // Domain validity
    InvalidDirection,
    OutOfBounds,
    InvalidBounds,

    // Preconditions
    NotFound,

    // Infrastructure
    Io,
    Serialization,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ExErrorKind::InvalidDirection => "ERR_INVALID_DIRECTION",
            ExErrorKind::OutOfBounds => "ERR_OUT_OF_BOUNDS",
            ExErrorKind::InvalidBounds => "ERR_INVALID_BOUNDS",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Storage and engine failures travel as `ExError`. Domain violations start
/// life as [`RobotError`] and are converted when they need to be logged.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_key: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_key: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the store key of the entity involved
    pub fn with_entity_key(mut self, key: impl Into<String>) -> Self {
        self.entity_key = Some(key.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_key(&self) -> Option<&str> {
        self.entity_key.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.entity_key {
            write!(f, " (entity_key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// A single violation raised while validating a command or an entity
///
/// The `Display` output is the message shown to the player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RobotError {
    // ===== Input Shape =====
    #[error("Must include all 3 placement values, separated by commas (e.g. 2,3,NORTH)")]
    MissingPlacementValue,

    #[error("All coordinates must be integers, but received {received}")]
    NonIntegerCoordinate { received: String },

    // ===== Domain Validity =====
    #[error("Direction must be one of NORTH, SOUTH, EAST, WEST, but received {received}")]
    InvalidDirection { received: String },

    #[error(
        "The {axis}-coordinate must be greater than or equal to {min}, but received '{received}'"
    )]
    CoordinateBelowMinimum { axis: Axis, min: i64, received: i128 },

    #[error("The {axis}-coordinate must be less than or equal to {max}, but received '{received}'")]
    CoordinateAboveMaximum { axis: Axis, max: i64, received: i128 },

    #[error("The max {axis}-coordinate must be an integer")]
    MaxCoordinateNotInteger { axis: Axis },

    #[error("The max {axis}-coordinate must not be negative")]
    MaxCoordinateNegative { axis: Axis },

    /// Reported ahead of the bounds violations of a rejected move
    #[error("Robot is facing the edge of the board and cannot be moved")]
    FacingEdge,

    // ===== Preconditions =====
    #[error("Robot must be placed in order to report its position")]
    RobotNotPlaced,

    #[error("A table must be created before the robot can be placed")]
    TableNotCreated,
}

impl RobotError {
    /// Classify this violation in the canonical taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            RobotError::MissingPlacementValue | RobotError::NonIntegerCoordinate { .. } => {
                ExErrorKind::InvalidInput
            }
            RobotError::InvalidDirection { .. } => ExErrorKind::InvalidDirection,
            RobotError::CoordinateBelowMinimum { .. }
            | RobotError::CoordinateAboveMaximum { .. }
            | RobotError::FacingEdge => ExErrorKind::OutOfBounds,
            RobotError::MaxCoordinateNotInteger { .. } | RobotError::MaxCoordinateNegative { .. } => {
                ExErrorKind::InvalidBounds
            }
            RobotError::RobotNotPlaced | RobotError::TableNotCreated => ExErrorKind::NotFound,
        }
    }
}

impl From<RobotError> for ExError {
    fn from(err: RobotError) -> Self {
        let ex = ExError::new(err.kind()).with_message(err.to_string());
        match err {
            RobotError::RobotNotPlaced => ex.with_entity_key("robot"),
            RobotError::TableNotCreated => ex.with_entity_key("table"),
            _ => ex,
        }
    }
}

/// A rejected command is classified by its first violation; the message
/// carries every violation.
impl From<Violations> for ExError {
    fn from(violations: Violations) -> Self {
        ExError::new(violations.first().kind()).with_message(violations.to_string())
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Serialization).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::InvalidDirection, "ERR_INVALID_DIRECTION"),
            (ExErrorKind::OutOfBounds, "ERR_OUT_OF_BOUNDS"),
            (ExErrorKind::InvalidBounds, "ERR_INVALID_BOUNDS"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_code_op_and_message() {
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("kv_put")
            .with_message("disk full")
            .with_entity_key("robot");

        assert_eq!(
            err.to_string(),
            "[ERR_PERSISTENCE] in operation 'kv_put': disk full (entity_key: robot)"
        );
    }

    #[test]
    fn test_robot_not_placed_maps_to_not_found() {
        let ex: ExError = RobotError::RobotNotPlaced.into();
        assert_eq!(ex.kind(), ExErrorKind::NotFound);
        assert_eq!(ex.entity_key(), Some("robot"));
        assert_eq!(
            ex.message(),
            "Robot must be placed in order to report its position"
        );
    }

    #[test]
    fn test_coordinate_message_templates() {
        let below = RobotError::CoordinateBelowMinimum {
            axis: Axis::X,
            min: 0,
            received: -1,
        };
        let above = RobotError::CoordinateAboveMaximum {
            axis: Axis::Y,
            max: 5,
            received: 10,
        };

        assert_eq!(
            below.to_string(),
            "The x-coordinate must be greater than or equal to 0, but received '-1'"
        );
        assert_eq!(
            above.to_string(),
            "The y-coordinate must be less than or equal to 5, but received '10'"
        );
    }

    #[test]
    fn test_source_chain_is_exposed() {
        use std::error::Error;

        let inner = ExError::new(ExErrorKind::Io).with_message("read failed");
        let outer = ExError::new(ExErrorKind::Persistence).with_source(inner);

        assert!(outer.source().is_some());
        assert_eq!(outer.source_error().map(|e| e.kind()), Some(ExErrorKind::Io));
    }
}
