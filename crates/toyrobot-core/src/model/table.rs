use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::RobotError;
use crate::rules::validation::{both, parse_integer_token, validate_all, Violations};

/// Lower bound shared by both axes
pub const MIN_COORDINATE: i64 = 0;

/// Upper bound used for both axes when a table is created without dimensions
pub const DEFAULT_MAX_COORDINATE: i64 = 5;

/// Grid axis, used to name the coordinate in violation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// The bounded grid a robot is confined to
///
/// Both bounds are inclusive; the lower bound is always [`MIN_COORDINATE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    max_x: i64,
    max_y: i64,
}

/// Persisted shape of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAttributes {
    pub max_x_coordinate: i64,
    pub max_y_coordinate: i64,
}

impl Table {
    /// Build a table without checking its bounds
    pub fn new(max_x: i64, max_y: i64) -> Self {
        Self { max_x, max_y }
    }

    /// Build a table from raw text bounds
    ///
    /// Each bound must be written as an integer and must not be negative.
    /// Both axes are checked and every failure is reported.
    pub fn from_raw(max_x: &str, max_y: &str) -> Result<Self, Violations> {
        let (max_x, max_y) = both(
            Self::parse_bound(Axis::X, max_x),
            Self::parse_bound(Axis::Y, max_y),
        )?;
        Ok(Self::new(max_x, max_y))
    }

    fn parse_bound(axis: Axis, token: &str) -> Result<i64, RobotError> {
        let value = parse_integer_token::<i64>(token)
            .ok_or(RobotError::MaxCoordinateNotInteger { axis })?;
        Self::check_bound(axis, value)?;
        Ok(value)
    }

    fn check_bound(axis: Axis, value: i64) -> Result<(), RobotError> {
        if value < MIN_COORDINATE {
            return Err(RobotError::MaxCoordinateNegative { axis });
        }
        Ok(())
    }

    pub fn max_x(&self) -> i64 {
        self.max_x
    }

    pub fn max_y(&self) -> i64 {
        self.max_y
    }

    /// Check that neither bound is negative
    pub fn validate_bounds(&self) -> Result<(), Violations> {
        validate_all(&[
            &|| Self::check_bound(Axis::X, self.max_x),
            &|| Self::check_bound(Axis::Y, self.max_y),
        ])
    }

    /// Validate the table, handing it back when its bounds are sound
    pub fn validate(self) -> Result<Self, Violations> {
        self.validate_bounds().map(|()| self)
    }

    /// Check a position against the table
    ///
    /// The four bound checks are independent; a position can fail on both
    /// axes at once and both violations are reported.
    pub fn validate_position(&self, x: i64, y: i64) -> Result<(), Violations> {
        self.validate_point(i128::from(x), i128::from(y))
    }

    /// [`Table::validate_position`] for candidate positions that may not fit
    /// in an `i64`, such as a typed coordinate or a step past `i64::MAX`
    pub fn validate_point(&self, x: i128, y: i128) -> Result<(), Violations> {
        validate_all(&[
            &|| Self::check_min(Axis::X, x),
            &|| Self::check_max(Axis::X, self.max_x, x),
            &|| Self::check_min(Axis::Y, y),
            &|| Self::check_max(Axis::Y, self.max_y, y),
        ])
    }

    /// Validate a candidate position and narrow it to table coordinates
    pub fn locate(&self, x: i128, y: i128) -> Result<(i64, i64), Violations> {
        self.validate_point(x, y)?;
        both(
            Self::narrow(Axis::X, self.max_x, x),
            Self::narrow(Axis::Y, self.max_y, y),
        )
    }

    fn narrow(axis: Axis, max: i64, received: i128) -> Result<i64, RobotError> {
        i64::try_from(received).map_err(|_| RobotError::CoordinateAboveMaximum {
            axis,
            max,
            received,
        })
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.validate_position(x, y).is_ok()
    }

    fn check_min(axis: Axis, received: i128) -> Result<(), RobotError> {
        if received < i128::from(MIN_COORDINATE) {
            return Err(RobotError::CoordinateBelowMinimum {
                axis,
                min: MIN_COORDINATE,
                received,
            });
        }
        Ok(())
    }

    fn check_max(axis: Axis, max: i64, received: i128) -> Result<(), RobotError> {
        if received > i128::from(max) {
            return Err(RobotError::CoordinateAboveMaximum {
                axis,
                max,
                received,
            });
        }
        Ok(())
    }

    pub fn attributes(&self) -> TableAttributes {
        TableAttributes {
            max_x_coordinate: self.max_x,
            max_y_coordinate: self.max_y,
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COORDINATE, DEFAULT_MAX_COORDINATE)
    }
}

impl From<TableAttributes> for Table {
    fn from(attrs: TableAttributes) -> Self {
        Self::new(attrs.max_x_coordinate, attrs.max_y_coordinate)
    }
}
