//! Command orchestration layer.
//!
//! Coordinates the core entities and the repositories for each command, and
//! turns every result into a `CommandOutcome`.

pub mod engine_command;
pub mod outcome;
pub mod robot_service;
pub mod table_service;

mod failure;
