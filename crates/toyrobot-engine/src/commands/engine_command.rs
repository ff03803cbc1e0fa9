//! Engine-level dispatch for player commands.

use toyrobot_core::Command;
use toyrobot_store::KeyValueStore;

use super::outcome::CommandOutcome;
use super::robot_service::RobotService;
use super::table_service::TableService;

/// Every command the engine can run against a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Place { raw: String },
    Move,
    TurnLeft,
    TurnRight,
    Report,
    Quit,
    CreateTable { max_x: String, max_y: String },
    EnsureTable,
    RemoveTable,
}

impl From<Command> for EngineCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Place(raw) => EngineCommand::Place { raw },
            Command::Move => EngineCommand::Move,
            Command::Left => EngineCommand::TurnLeft,
            Command::Right => EngineCommand::TurnRight,
            Command::Report => EngineCommand::Report,
            Command::Quit => EngineCommand::Quit,
        }
    }
}

/// Apply an engine command to `store`
pub fn apply_engine_command(cmd: EngineCommand, store: &dyn KeyValueStore) -> CommandOutcome {
    tracing::debug!(command = ?cmd, "dispatching command");
    match cmd {
        EngineCommand::Place { raw } => RobotService::new(store).place(&raw),
        EngineCommand::Move => RobotService::new(store).move_forward(),
        EngineCommand::TurnLeft => RobotService::new(store).turn_left(),
        EngineCommand::TurnRight => RobotService::new(store).turn_right(),
        EngineCommand::Report => RobotService::new(store).report(),
        EngineCommand::Quit => RobotService::new(store).quit(),
        EngineCommand::CreateTable { max_x, max_y } => {
            TableService::new(store).create_table(&max_x, &max_y)
        }
        EngineCommand::EnsureTable => TableService::new(store).ensure_table(),
        EngineCommand::RemoveTable => TableService::new(store).remove_table(),
    }
}
