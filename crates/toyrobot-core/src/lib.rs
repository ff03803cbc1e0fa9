//! Toy Robot Core - entities and validation rules
//!
//! This crate holds everything about the robot that does not touch storage:
//! - Table and Robot entities, with movement and rotation
//! - The error-accumulating validation pipeline
//! - The command vocabulary parsed from prompt lines
//! - The error facility (`ExError`, `RobotError`)
//! - The logging facility and its boundary macros

pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, Result, RobotError};
pub use model::{Axis, Direction, Placement, Robot, RobotAttributes, Table, TableAttributes};
pub use rules::Violations;
