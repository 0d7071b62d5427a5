use thiserror::Error;

use crate::protocol::{server_rejected_message, TRANSPORT_FAILURE_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no file selected")]
    MissingFile,
    #[error("upload rejected by server with status {status}")]
    ServerRejected { status: u16 },
    #[error("upload transport failure: {0}")]
    Transport(String),
}

impl SubmitError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// User-visible text for failures that happen once the upload was started.
    /// `MissingFile` never reaches the status line.
    pub fn status_message(&self) -> Option<String> {
        match self {
            Self::MissingFile => None,
            Self::ServerRejected { status } => Some(server_rejected_message(*status)),
            Self::Transport(_) => Some(TRANSPORT_FAILURE_MESSAGE.to_string()),
        }
    }
}
