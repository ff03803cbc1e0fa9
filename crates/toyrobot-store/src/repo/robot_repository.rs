use toyrobot_core::{Direction, Robot, RobotAttributes};

use super::{from_record, to_record};
use crate::errors::{codec_error, Result};
use crate::kv::{KeyValueStore, ROBOT_KEY};

/// Persists the single robot under [`ROBOT_KEY`]
pub struct RobotRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> RobotRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the robot, if one has been placed
    ///
    /// The stored heading must name a direction. The position is handed back
    /// as stored; checking it against a table is the caller's business.
    pub fn find(&self) -> Result<Option<Robot>> {
        let Some(record) = self.store.get(ROBOT_KEY)? else {
            tracing::debug!(key = ROBOT_KEY, "robot not found");
            return Ok(None);
        };

        let attributes: RobotAttributes = from_record("robot_find", ROBOT_KEY, record)?;
        let direction = attributes
            .direction
            .parse::<Direction>()
            .map_err(|e| codec_error("robot_find", ROBOT_KEY, e.to_string()))?;

        tracing::debug!(key = ROBOT_KEY, "robot loaded");
        Ok(Some(Robot::new(
            attributes.x_coordinate,
            attributes.y_coordinate,
            direction,
        )))
    }

    pub fn save(&self, robot: &Robot) -> Result<()> {
        let record = to_record("robot_save", ROBOT_KEY, &robot.attributes())?;
        self.store.put(ROBOT_KEY, record)?;
        tracing::debug!(key = ROBOT_KEY, position = %robot, "robot saved");
        Ok(())
    }

    pub fn delete(&self) -> Result<()> {
        self.store.delete(ROBOT_KEY)?;
        tracing::debug!(key = ROBOT_KEY, "robot deleted");
        Ok(())
    }
}
