//! Command boundary: request ids, timing and start/end logging

use std::time::Instant;

use toyrobot_core::errors::{ExError, RobotError};
use toyrobot_core::rules::Violations;
use toyrobot_core_types::RequestId;

use super::outcome::{CommandOutcome, CommandStatus};

/// Why a command did not go through
#[derive(Debug, Clone)]
pub(crate) enum CommandFailure {
    /// The player's input or the game state broke one or more rules
    Rejected(Violations),
    /// The store could not be read or written
    Storage(ExError),
}

impl CommandFailure {
    fn message(&self) -> String {
        match self {
            CommandFailure::Rejected(violations) => violations.to_string(),
            CommandFailure::Storage(err) => err.to_string(),
        }
    }

    fn with_request_id(self, request_id: &RequestId) -> Self {
        match self {
            CommandFailure::Storage(err) => {
                CommandFailure::Storage(err.with_request_id(request_id.clone()))
            }
            rejected => rejected,
        }
    }
}

impl From<Violations> for CommandFailure {
    fn from(violations: Violations) -> Self {
        CommandFailure::Rejected(violations)
    }
}

impl From<RobotError> for CommandFailure {
    fn from(err: RobotError) -> Self {
        CommandFailure::Rejected(Violations::single(err))
    }
}

impl From<ExError> for CommandFailure {
    fn from(err: ExError) -> Self {
        CommandFailure::Storage(err)
    }
}

impl From<CommandFailure> for ExError {
    fn from(failure: CommandFailure) -> Self {
        match failure {
            CommandFailure::Rejected(violations) => violations.into(),
            CommandFailure::Storage(err) => err,
        }
    }
}

/// Run one command under a fresh request id
///
/// Emits exactly one start event and one end or end_error event, all
/// tagged with the request id that the outcome carries back.
pub(crate) fn run_command<F>(op: &'static str, on_success: CommandStatus, body: F) -> CommandOutcome
where
    F: FnOnce() -> Result<String, CommandFailure>,
{
    let request_id = RequestId::new();
    let start = Instant::now();
    toyrobot_core::log_op_start!(op, request_id = request_id.as_str());

    match body() {
        Ok(message) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            toyrobot_core::log_op_end!(
                op,
                duration_ms = duration_ms,
                request_id = request_id.as_str()
            );
            match on_success {
                CommandStatus::Quit => CommandOutcome::quit(message, request_id),
                _ => CommandOutcome::success(message, request_id),
            }
        }
        Err(failure) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let failure = failure.with_request_id(&request_id);
            let message = failure.message();
            toyrobot_core::log_op_error!(
                op,
                failure,
                duration_ms = duration_ms,
                request_id = request_id.as_str()
            );
            CommandOutcome::failure(message, request_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyrobot_core::ExErrorKind;

    #[test]
    fn test_rejected_message_lists_every_violation() {
        let failure: CommandFailure = Violations::single(RobotError::FacingEdge)
            .prepend(RobotError::RobotNotPlaced)
            .into();
        assert_eq!(failure.message().lines().count(), 2);
    }

    #[test]
    fn test_storage_failure_keeps_error_and_gains_request_id() {
        let rid = RequestId::from_string("req-9".to_string());
        let failure = CommandFailure::from(
            ExError::new(ExErrorKind::Persistence).with_message("disk full"),
        )
        .with_request_id(&rid);

        let ex: ExError = failure.into();
        assert_eq!(ex.kind(), ExErrorKind::Persistence);
        assert_eq!(ex.request_id(), Some(&rid));
    }

    #[test]
    fn test_run_command_maps_status() {
        let ok = run_command("test_ok", CommandStatus::Success, || Ok("done".to_string()));
        assert_eq!(ok.status, CommandStatus::Success);
        assert_eq!(ok.message, "done");

        let bye = run_command("test_quit", CommandStatus::Quit, || Ok("bye".to_string()));
        assert_eq!(bye.status, CommandStatus::Quit);

        let err = run_command("test_err", CommandStatus::Success, || {
            Err(RobotError::TableNotCreated.into())
        });
        assert_eq!(err.status, CommandStatus::Failure);
        assert_eq!(
            err.message,
            "A table must be created before the robot can be placed"
        );
    }
}
