//! Toy Robot CLI
//!
//! Command-line interface for the Toy Robot game. Game state is kept in a
//! SQLite file, so each invocation picks up where the last one stopped.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use toyrobot_core::logging_facility::{self, Profile};
use toyrobot_store::SqliteStore;

use commands::robot::Action;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "toyrobot")]
#[command(about = "Toy Robot - move a robot around a table", long_about = None)]
struct Cli {
    /// Path to the game state database
    #[arg(long, global = true, default_value = ".toyrobot/state.db")]
    db: PathBuf,

    /// Log profile; logging is off when omitted
    #[arg(long, global = true, value_enum)]
    log: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Place the robot at X,Y facing DIRECTION
    Place(commands::robot::PlaceArgs),
    /// Move the robot one space forward
    Move,
    /// Rotate the robot 90 degrees to the left
    Left,
    /// Rotate the robot 90 degrees to the right
    Right,
    /// Print the robot's position
    Report,
    /// End the game and clear its state
    Quit,
    /// Table operations
    Table(commands::table::TableArgs),
    /// Play interactively, one command per line
    Play,
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        logging_facility::init(profile.into());
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open(&cli.db)?;

    match cli.command {
        Commands::Place(args) => commands::robot::execute_place(args, &store),
        Commands::Move => commands::robot::execute(Action::Move, &store),
        Commands::Left => commands::robot::execute(Action::Left, &store),
        Commands::Right => commands::robot::execute(Action::Right, &store),
        Commands::Report => commands::robot::execute(Action::Report, &store),
        Commands::Quit => commands::robot::execute(Action::Quit, &store),
        Commands::Table(args) => commands::table::execute(args, &store),
        Commands::Play => commands::play::execute(&store),
    }
}
