//! Events sent from the backend worker to the UI thread.

use client_core::SubmitResult;

pub enum UiEvent {
    WorkerReady,
    WorkerFailed(String),
    UploadFinished { attempt: u64, result: SubmitResult },
}
