//! Toy Robot Engine - Orchestration layer
//!
//! Runs each player command as load, mutate, validate, save against a
//! `KeyValueStore`, and owns the boundary logging for every command.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand};
pub use commands::outcome::{CommandOutcome, CommandStatus};
pub use commands::robot_service::RobotService;
pub use commands::table_service::TableService;
