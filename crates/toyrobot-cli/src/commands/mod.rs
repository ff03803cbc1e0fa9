//! Subcommand handlers

pub mod play;
pub mod robot;
pub mod table;

use toyrobot_engine::CommandOutcome;

/// Print a successful outcome, or turn a failed one into an error
pub(crate) fn finish(outcome: CommandOutcome) -> Result<(), Box<dyn std::error::Error>> {
    if outcome.is_failure() {
        return Err(outcome.message.into());
    }
    println!("{}", outcome.message);
    Ok(())
}
