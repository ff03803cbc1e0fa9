pub mod direction;
pub mod robot;
pub mod table;

pub use direction::Direction;
pub use robot::{Placement, Robot, RobotAttributes};
pub use table::{Axis, Table, TableAttributes, DEFAULT_MAX_COORDINATE, MIN_COORDINATE};
