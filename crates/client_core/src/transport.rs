//! reqwest-backed upload transport.

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use serde_json::Value;
use shared::{
    error::SubmitError,
    protocol::{UploadResponse, CODE_FIELD, EMAIL_FIELD, FILE_FIELD},
};
use tracing::{debug, error, info};

use crate::{SubmitOutcome, SubmitResult, UploadRequest, UploadTransport};

#[derive(Debug, Clone)]
pub struct HttpUploadClient {
    http: Client,
    upload_url: String,
}

impl HttpUploadClient {
    pub fn new(upload_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), upload_url)
    }

    pub fn with_client(http: Client, upload_url: impl Into<String>) -> Self {
        Self {
            http,
            upload_url: upload_url.into(),
        }
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    async fn build_form(&self, request: &UploadRequest) -> Result<Form, SubmitError> {
        let bytes = tokio::fs::read(&request.file.path).await.map_err(|err| {
            error!(
                path = %request.file.path.display(),
                "upload: failed to read selected file: {err}"
            );
            SubmitError::transport(format!(
                "failed to read '{}': {err}",
                request.file.path.display()
            ))
        })?;
        let mime_type = mime_guess::from_path(&request.file.path).first_or_octet_stream();
        let file_part = Part::bytes(bytes)
            .file_name(request.file.file_name.clone())
            .mime_str(mime_type.essence_str())
            .map_err(SubmitError::transport)?;

        Ok(Form::new()
            .part(FILE_FIELD, file_part)
            .text(CODE_FIELD, request.code.clone())
            .text(EMAIL_FIELD, request.email.clone()))
    }
}

#[async_trait]
impl UploadTransport for HttpUploadClient {
    async fn upload(&self, request: &UploadRequest) -> SubmitResult {
        let form = self.build_form(request).await?;

        info!(
            file = %request.file.file_name,
            endpoint = %self.upload_url,
            "upload: sending file to backend"
        );
        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                error!(endpoint = %self.upload_url, "upload: failed to reach backend: {err}");
                SubmitError::transport(err)
            })?;

        let status = response.status();
        info!(status = status.as_u16(), "upload: response received from backend");
        if !status.is_success() {
            error!(status = status.as_u16(), "upload: backend failed to process pdf");
            return Err(SubmitError::ServerRejected {
                status: status.as_u16(),
            });
        }

        let raw: Value = response.json().await.map_err(|err| {
            error!("upload: backend response was not valid json: {err}");
            SubmitError::transport(err)
        })?;
        let body = UploadResponse::from_json(&raw);
        debug!(?body, "upload: decoded backend response");

        Ok(SubmitOutcome {
            status: status.as_u16(),
            message: body.status_message(),
            summary: body.summary(),
        })
    }
}
