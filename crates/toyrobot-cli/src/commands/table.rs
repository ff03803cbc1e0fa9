//! Table commands
//!
//! Usage: toyrobot table create [--max-x N] [--max-y N] | toyrobot table remove

use clap::{Args, Subcommand};
use toyrobot_engine::{apply_engine_command, EngineCommand};
use toyrobot_store::KeyValueStore;

use super::finish;

#[derive(Debug, Args)]
pub struct TableArgs {
    #[command(subcommand)]
    pub command: TableCommand,
}

#[derive(Debug, Subcommand)]
pub enum TableCommand {
    /// Create the table, replacing any existing one
    Create(CreateArgs),
    /// Remove the table
    Remove,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Largest x-coordinate on the table
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub max_x: String,

    /// Largest y-coordinate on the table
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub max_y: String,
}

/// Execute table command
pub fn execute(args: TableArgs, store: &dyn KeyValueStore) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = match args.command {
        TableCommand::Create(create) => EngineCommand::CreateTable {
            max_x: create.max_x,
            max_y: create.max_y,
        },
        TableCommand::Remove => EngineCommand::RemoveTable,
    };
    finish(apply_engine_command(cmd, store))
}
