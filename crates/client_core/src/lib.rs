use async_trait::async_trait;
use shared::{domain::SelectedFile, error::SubmitError};
use tracing::{error, info, warn};

pub mod config;
pub mod transport;

pub use config::Settings;
pub use transport::HttpUploadClient;

/// Snapshot of the form taken when a submission starts. Later edits to the
/// form do not affect an upload that is already in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file: SelectedFile,
    pub code: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub status: u16,
    pub message: String,
    pub summary: Option<String>,
}

pub type SubmitResult = Result<SubmitOutcome, SubmitError>;

#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn upload(&self, request: &UploadRequest) -> SubmitResult;
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    selected_file: Option<SelectedFile>,
    code: String,
    email: String,
    status_message: String,
    summary: Option<String>,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.selected_file = file;
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Checks the precondition and snapshots the current fields. Leaves the
    /// form untouched either way.
    pub fn prepare_submission(&self) -> Result<UploadRequest, SubmitError> {
        let Some(file) = self.selected_file.clone() else {
            warn!("upload: no file selected, submission skipped");
            return Err(SubmitError::MissingFile);
        };

        Ok(UploadRequest {
            file,
            code: self.code.clone(),
            email: self.email.clone(),
        })
    }

    /// Writes the status line from a finished attempt. Results are applied in
    /// the order they arrive, so with overlapping uploads the last one wins.
    pub fn apply_result(&mut self, result: &SubmitResult) {
        match result {
            Ok(outcome) => {
                self.status_message = outcome.message.clone();
                self.summary = outcome.summary.clone();
            }
            Err(err) => {
                if let Some(message) = err.status_message() {
                    self.status_message = message;
                    self.summary = None;
                }
            }
        }
    }

    pub async fn submit<T>(&mut self, transport: &T) -> SubmitResult
    where
        T: UploadTransport + ?Sized,
    {
        let request = self.prepare_submission()?;
        let result = transport.upload(&request).await;
        match &result {
            Ok(outcome) => info!(
                status = outcome.status,
                file = %request.file.file_name,
                "upload: completed"
            ),
            Err(err) => error!(file = %request.file.file_name, "upload: failed: {err}"),
        }
        self.apply_result(&result);
        result
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
