//! What a command hands back to the player

use serde::Serialize;
use toyrobot_core_types::RequestId;

/// How a command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Success,
    /// The game is over and its state has been cleared
    Quit,
    Failure,
}

/// Result of one command
///
/// On failure `message` holds every violation, one per line. On success it is
/// the command's confirmation, or the position string for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub status: CommandStatus,
    pub message: String,
    pub request_id: RequestId,
}

impl CommandOutcome {
    pub fn success(message: impl Into<String>, request_id: RequestId) -> Self {
        Self {
            status: CommandStatus::Success,
            message: message.into(),
            request_id,
        }
    }

    pub fn quit(message: impl Into<String>, request_id: RequestId) -> Self {
        Self {
            status: CommandStatus::Quit,
            message: message.into(),
            request_id,
        }
    }

    pub fn failure(message: impl Into<String>, request_id: RequestId) -> Self {
        Self {
            status: CommandStatus::Failure,
            message: message.into(),
            request_id,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }

    pub fn is_failure(&self) -> bool {
        self.status == CommandStatus::Failure
    }

    pub fn is_quit(&self) -> bool {
        self.status == CommandStatus::Quit
    }

    /// Failure messages, one entry per violation
    pub fn lines(&self) -> Vec<&str> {
        self.message.lines().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        let rid = RequestId::from_string("req-1".to_string());
        assert!(CommandOutcome::success("ok", rid.clone()).is_success());
        assert!(CommandOutcome::quit("bye", rid.clone()).is_quit());
        assert!(CommandOutcome::failure("no", rid).is_failure());
    }

    #[test]
    fn test_lines_split_violations() {
        let outcome = CommandOutcome::failure("first\nsecond", RequestId::new());
        assert_eq!(outcome.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_serializes_for_machine_output() {
        let outcome =
            CommandOutcome::success("2,3,NORTH", RequestId::from_string("req-7".to_string()));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({
                "status": "success",
                "message": "2,3,NORTH",
                "request_id": "req-7"
            })
        );
    }
}
