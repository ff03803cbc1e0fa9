//! Interactive session
//!
//! Usage: toyrobot play
//!
//! Reads one command per line (`PLACE 2,3,NORTH`, `MOVE`, `LEFT`, `RIGHT`,
//! `REPORT`, `QUIT`) until QUIT or end of input. Failures are printed and
//! the session carries on.

use std::io::{self, BufRead, Write};

use toyrobot_core::Command;
use toyrobot_engine::{apply_engine_command, EngineCommand};
use toyrobot_store::KeyValueStore;

const PROMPT: &str = "> ";

/// Execute play
pub fn execute(store: &dyn KeyValueStore) -> Result<(), Box<dyn std::error::Error>> {
    let setup = apply_engine_command(EngineCommand::EnsureTable, store);
    if setup.is_failure() {
        return Err(setup.message.into());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout, store)
}

/// Drive a session from `input`, writing prompts and outcomes to `output`
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    store: &dyn KeyValueStore,
) -> Result<(), Box<dyn std::error::Error>> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                let outcome = apply_engine_command(command.into(), store);
                writeln!(output, "{}", outcome.message)?;
                if outcome.is_quit() {
                    return Ok(());
                }
            }
            Err(e) => writeln!(output, "{}", e.message())?,
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyrobot_store::MemoryStore;

    fn play(script: &str) -> String {
        let store = MemoryStore::new();
        apply_engine_command(EngineCommand::EnsureTable, &store);
        let mut output = Vec::new();
        run_session(script.as_bytes(), &mut output, &store).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_runs_until_quit() {
        let output = play("PLACE 0,0,NORTH\nMOVE\nREPORT\nQUIT\nREPORT\n");
        assert_eq!(
            output,
            "> Robot placed on the board!\n\
             > Robot moved forward one space!\n\
             > 0,1,NORTH\n\
             > Thanks for playing Toy Robot!\n"
        );
    }

    #[test]
    fn test_session_reports_bad_lines_and_continues() {
        let output = play("JUMP\nreport\n");
        assert!(output.contains("Unknown command 'JUMP'"));
        assert!(output.contains("Robot must be placed in order to report its position"));
        assert!(output.ends_with("> \n"));
    }
}
