//! Backend commands queued from UI to backend worker.

use client_core::UploadRequest;

pub enum BackendCommand {
    Upload { attempt: u64, request: UploadRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Upload { .. } => "upload",
        }
    }
}
