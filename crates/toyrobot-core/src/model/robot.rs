use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::table::Table;
use crate::rules::validation::{validate_all, Violations};

/// Raw robot state: what the store holds
///
/// Nothing about these values is trusted until [`RobotAttributes::validate`]
/// has checked them against a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotAttributes {
    pub x_coordinate: i64,
    pub y_coordinate: i64,
    pub direction: String,
}

impl RobotAttributes {
    pub fn new(x_coordinate: i64, y_coordinate: i64, direction: impl Into<String>) -> Self {
        Self {
            x_coordinate,
            y_coordinate,
            direction: direction.into(),
        }
    }

    /// Validate against `table`, producing a robot
    ///
    /// The heading check and the table's position checks all run; every
    /// violation is returned, heading first.
    pub fn validate(self, table: &Table) -> Result<Robot, Violations> {
        Placement::from(self).validate(table)
    }
}

/// A requested position as typed by the player
///
/// Coordinates are wider than a table bound so that a number past `i64`
/// is still reported as off the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub x: i128,
    pub y: i128,
    pub direction: String,
}

impl Placement {
    pub fn new(x: i128, y: i128, direction: impl Into<String>) -> Self {
        Self {
            x,
            y,
            direction: direction.into(),
        }
    }

    /// Validate against `table`, producing a robot
    pub fn validate(self, table: &Table) -> Result<Robot, Violations> {
        let heading = validate_all(&[&|| self.direction.parse::<Direction>().map(|_| ())]);
        let position = table.validate_point(self.x, self.y);
        Violations::combine([heading, position])?;

        let direction = self.direction.parse::<Direction>()?;
        let (x, y) = table.locate(self.x, self.y)?;
        Ok(Robot::new(x, y, direction))
    }
}

impl From<RobotAttributes> for Placement {
    fn from(attributes: RobotAttributes) -> Self {
        Self::new(
            i128::from(attributes.x_coordinate),
            i128::from(attributes.y_coordinate),
            attributes.direction,
        )
    }
}

/// A robot with a known heading
///
/// The position is not checked on construction. Only
/// [`Robot::move_forward`] changes it, and that checks the table first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    x: i64,
    y: i64,
    direction: Direction,
}

impl Robot {
    pub fn new(x: i64, y: i64, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The square one unit along the current heading
    pub fn forward_position(&self) -> (i128, i128) {
        let (dx, dy) = self.direction.delta();
        (
            i128::from(self.x) + i128::from(dx),
            i128::from(self.y) + i128::from(dy),
        )
    }

    /// The robot one step along its heading, if that square is on `table`
    pub fn move_forward(self, table: &Table) -> Result<Robot, Violations> {
        let (x, y) = self.forward_position();
        let (x, y) = table.locate(x, y)?;
        Ok(Robot::new(x, y, self.direction))
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.right();
    }

    /// Position in `X,Y,DIRECTION` form
    pub fn report(&self) -> String {
        format!("{},{},{}", self.x, self.y, self.direction)
    }

    pub fn attributes(&self) -> RobotAttributes {
        RobotAttributes::new(self.x, self.y, self.direction.as_str())
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report())
    }
}
