//! Robot commands
//!
//! Every command loads what it needs and works on a copy. Place and move
//! check the copy against the table; a turn only needs the robot. Nothing is
//! written back until the copy is accepted, so a rejected command leaves the
//! store untouched.

use toyrobot_core::errors::RobotError;
use toyrobot_core::rules::validation::{both, parse_integer_token};
use toyrobot_core::rules::Violations;
use toyrobot_core::{Placement, Robot, Table};
use toyrobot_store::{KeyValueStore, RobotRepository, TableRepository};

use super::failure::{run_command, CommandFailure};
use super::outcome::{CommandOutcome, CommandStatus};

pub const PLACE_SUCCESS_MESSAGE: &str = "Robot placed on the board!";
pub const MOVE_SUCCESS_MESSAGE: &str = "Robot moved forward one space!";
pub const TURN_LEFT_SUCCESS_MESSAGE: &str = "Robot rotated left!";
pub const TURN_RIGHT_SUCCESS_MESSAGE: &str = "Robot rotated right!";
pub const QUIT_MESSAGE: &str = "Thanks for playing Toy Robot!";

/// Runs robot commands against a store
pub struct RobotService<'a> {
    store: &'a dyn KeyValueStore,
    robots: RobotRepository<'a>,
    tables: TableRepository<'a>,
}

impl<'a> RobotService<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            store,
            robots: RobotRepository::new(store),
            tables: TableRepository::new(store),
        }
    }

    /// Put a robot on the table from `X,Y,DIRECTION` text
    ///
    /// Checks run in layers: the shape of the input, then the presence of a
    /// table, then the robot's heading and position. A layer only runs when
    /// the one before it passed; within a layer every failure is reported.
    pub fn place(&self, raw: &str) -> CommandOutcome {
        run_command("robot_place", CommandStatus::Success, || {
            self.place_impl(raw)
        })
    }

    fn place_impl(&self, raw: &str) -> Result<String, CommandFailure> {
        let placement = parse_placement(raw)?;
        let table = self.require_table()?;
        let robot = placement.validate(&table)?;
        self.robots.save(&robot)?;
        Ok(PLACE_SUCCESS_MESSAGE.to_string())
    }

    /// Step the robot one space along its heading
    ///
    /// A move that would leave the table is refused with the edge message
    /// followed by the bounds the candidate position breaks.
    pub fn move_forward(&self) -> CommandOutcome {
        run_command("robot_move", CommandStatus::Success, || {
            let robot = self.require_robot()?;
            let table = self.require_table()?;
            let moved = robot
                .move_forward(&table)
                .map_err(|violations| violations.prepend(RobotError::FacingEdge))?;
            self.robots.save(&moved)?;
            Ok(MOVE_SUCCESS_MESSAGE.to_string())
        })
    }

    /// Rotate a quarter turn anticlockwise; the position is not checked
    pub fn turn_left(&self) -> CommandOutcome {
        run_command("robot_turn_left", CommandStatus::Success, || {
            self.rotate(Robot::turn_left)?;
            Ok(TURN_LEFT_SUCCESS_MESSAGE.to_string())
        })
    }

    pub fn turn_right(&self) -> CommandOutcome {
        run_command("robot_turn_right", CommandStatus::Success, || {
            self.rotate(Robot::turn_right)?;
            Ok(TURN_RIGHT_SUCCESS_MESSAGE.to_string())
        })
    }

    /// Position as `X,Y,DIRECTION`
    pub fn report(&self) -> CommandOutcome {
        run_command("robot_report", CommandStatus::Success, || {
            let robot = self.require_robot()?;
            Ok(robot.report())
        })
    }

    /// End the game, clearing the robot and the table
    pub fn quit(&self) -> CommandOutcome {
        run_command("robot_quit", CommandStatus::Quit, || {
            self.store.clear()?;
            Ok(QUIT_MESSAGE.to_string())
        })
    }

    fn rotate(&self, turn: impl FnOnce(&mut Robot)) -> Result<(), CommandFailure> {
        let mut robot = self.require_robot()?;
        turn(&mut robot);
        self.robots.save(&robot)?;
        Ok(())
    }

    fn require_robot(&self) -> Result<Robot, CommandFailure> {
        let robot = self.robots.find()?.ok_or(RobotError::RobotNotPlaced)?;
        Ok(robot)
    }

    fn require_table(&self) -> Result<Table, CommandFailure> {
        let table = self.tables.find()?.ok_or(RobotError::TableNotCreated)?;
        Ok(table)
    }
}

/// Split `X,Y,DIRECTION` into an unvalidated placement
///
/// Anything other than three non-empty fields is one missing-value
/// violation. Both coordinates are then checked and reported together.
fn parse_placement(raw: &str) -> Result<Placement, Violations> {
    let fields: Vec<&str> = raw.split(',').collect();
    let [x, y, direction] = fields.as_slice() else {
        return Err(RobotError::MissingPlacementValue.into());
    };
    if fields.iter().any(|field| field.is_empty()) {
        return Err(RobotError::MissingPlacementValue.into());
    }

    let (x, y) = both(coordinate(x), coordinate(y))?;
    Ok(Placement::new(x, y, *direction))
}

fn coordinate(token: &str) -> Result<i128, RobotError> {
    parse_integer_token::<i128>(token).ok_or_else(|| RobotError::NonIntegerCoordinate {
        received: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyrobot_core::model::Axis;

    #[test]
    fn test_parse_placement_accepts_three_fields() {
        assert_eq!(
            parse_placement("2,3,NORTH").unwrap(),
            Placement::new(2, 3, "NORTH")
        );
    }

    #[test]
    fn test_parse_placement_keeps_wide_coordinates() {
        assert_eq!(
            parse_placement("99999999999999999999,0,NORTH").unwrap(),
            Placement::new(99_999_999_999_999_999_999, 0, "NORTH")
        );
    }

    #[test]
    fn test_parse_placement_shape_errors() {
        for raw in ["", "2", "2,3", "2,3,", ",3,NORTH", "2,3,NORTH,EXTRA"] {
            let err = parse_placement(raw).unwrap_err();
            assert_eq!(
                err.into_vec(),
                vec![RobotError::MissingPlacementValue],
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_placement_reports_both_coordinates() {
        let err = parse_placement("a,2.5,NORTH").unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                "All coordinates must be integers, but received a",
                "All coordinates must be integers, but received 2.5",
            ]
        );
    }

    #[test]
    fn test_parse_placement_leaves_heading_to_validation() {
        let placement = parse_placement("9,9,UP").unwrap();
        let err = placement.validate(&Table::default()).unwrap_err();
        assert_eq!(err.len(), 3);
        assert!(err.contains(&RobotError::CoordinateAboveMaximum {
            axis: Axis::X,
            max: 5,
            received: 9,
        }));
    }
}
