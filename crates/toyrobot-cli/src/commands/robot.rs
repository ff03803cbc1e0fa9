//! Robot commands
//!
//! Usage: toyrobot place <X,Y,DIRECTION> | move | left | right | report | quit

use clap::Args;
use toyrobot_engine::{apply_engine_command, EngineCommand};
use toyrobot_store::KeyValueStore;

use super::finish;

#[derive(Debug, Args)]
pub struct PlaceArgs {
    /// Position and heading, e.g. 2,3,NORTH
    #[arg(allow_hyphen_values = true)]
    pub position: String,
}

/// Robot commands that take no arguments
#[derive(Debug, Clone, Copy)]
pub enum Action {
    Move,
    Left,
    Right,
    Report,
    Quit,
}

impl From<Action> for EngineCommand {
    fn from(action: Action) -> Self {
        match action {
            Action::Move => EngineCommand::Move,
            Action::Left => EngineCommand::TurnLeft,
            Action::Right => EngineCommand::TurnRight,
            Action::Report => EngineCommand::Report,
            Action::Quit => EngineCommand::Quit,
        }
    }
}

/// Execute place
pub fn execute_place(
    args: PlaceArgs,
    store: &dyn KeyValueStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = EngineCommand::Place { raw: args.position };
    finish(apply_engine_command(cmd, store))
}

/// Execute an argument-less robot command
pub fn execute(action: Action, store: &dyn KeyValueStore) -> Result<(), Box<dyn std::error::Error>> {
    finish(apply_engine_command(action.into(), store))
}
