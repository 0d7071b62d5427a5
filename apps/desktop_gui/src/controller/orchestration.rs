//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::error::SubmitError;

use crate::backend_bridge::commands::BackendCommand;

/// Queue failures count as transport failures for the attempt that caused them.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), SubmitError> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::error!(command = cmd_name, "ui command queue is full");
            Err(SubmitError::transport("ui command queue is full"))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(
                command = cmd_name,
                "backend worker disconnected (possible startup/runtime failure)"
            );
            Err(SubmitError::transport("backend worker disconnected"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::UploadRequest;
    use crossbeam_channel::bounded;
    use shared::domain::SelectedFile;

    fn upload(attempt: u64) -> BackendCommand {
        BackendCommand::Upload {
            attempt,
            request: UploadRequest {
                file: SelectedFile::from_path("report.pdf"),
                code: "1234".to_string(),
                email: "a@b.com".to_string(),
            },
        }
    }

    #[test]
    fn queues_command_when_worker_is_listening() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, upload(1)).expect("queued");
        let BackendCommand::Upload { attempt, request } = rx.try_recv().expect("command");
        assert_eq!(attempt, 1);
        assert_eq!(request.code, "1234");
    }

    #[test]
    fn full_queue_is_a_transport_failure() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, upload(1)).expect("first fits");
        let err = dispatch_backend_command(&tx, upload(2)).expect_err("full");
        assert!(matches!(err, SubmitError::Transport(_)));
    }

    #[test]
    fn disconnected_worker_is_a_transport_failure() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let err = dispatch_backend_command(&tx, upload(1)).expect_err("disconnected");
        assert!(err.to_string().contains("disconnected"), "{err}");
    }
}
