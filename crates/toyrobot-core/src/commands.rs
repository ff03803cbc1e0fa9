//! Command vocabulary understood by the robot
//!
//! A prompt line such as `PLACE 2,3,NORTH` or `move` parses into a
//! [`Command`]. Keywords are case-insensitive; the place argument is kept
//! verbatim so the engine can report exactly what the player typed.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ExError, ExErrorKind};

/// One player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put the robot on the table; argument is the raw `X,Y,DIRECTION` text
    Place(String),
    Move,
    Left,
    Right,
    Report,
    /// Clear the robot and the table and end the session
    Quit,
}

impl Command {
    /// Keywords accepted at the prompt
    pub const KEYWORDS: [&'static str; 6] = ["PLACE", "MOVE", "LEFT", "RIGHT", "REPORT", "QUIT"];
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place(raw) => write!(f, "PLACE {}", raw),
            Command::Move => f.write_str("MOVE"),
            Command::Left => f.write_str("LEFT"),
            Command::Right => f.write_str("RIGHT"),
            Command::Report => f.write_str("REPORT"),
            Command::Quit => f.write_str("QUIT"),
        }
    }
}

impl FromStr for Command {
    type Err = ExError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_uppercase().as_str() {
            "PLACE" => return Ok(Command::Place(rest.to_string())),
            "MOVE" => Command::Move,
            "LEFT" => Command::Left,
            "RIGHT" => Command::Right,
            "REPORT" => Command::Report,
            "QUIT" => Command::Quit,
            _ => {
                return Err(ExError::new(ExErrorKind::UnknownCommand)
                    .with_op("parse_command")
                    .with_message(format!(
                        "Unknown command '{}'; expected one of {}",
                        keyword,
                        Command::KEYWORDS.join(", ")
                    )))
            }
        };

        if !rest.is_empty() {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_command")
                .with_message(format!("{} does not take any arguments", command)));
        }

        Ok(command)
    }
}
