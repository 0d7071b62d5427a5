use serde_json::Value;

pub const DEFAULT_UPLOAD_URL: &str = "http://127.0.0.1:5000/upload";

pub const FILE_FIELD: &str = "file";
pub const CODE_FIELD: &str = "code";
pub const EMAIL_FIELD: &str = "email";

pub const DEFAULT_SUCCESS_MESSAGE: &str = "✅ PDF processado com sucesso!";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Erro ao enviar o PDF. Verifique o console.";

pub fn server_rejected_message(status: u16) -> String {
    format!("Erro ao processar PDF! Código: {status}")
}

/// Fields the client reads from a 2xx reply. Anything else in the body,
/// whatever its type, is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadResponse {
    pub message: Option<String>,
    pub resumo: Option<String>,
}

impl UploadResponse {
    pub fn from_json(body: &Value) -> Self {
        let text_field = |name: &str| {
            body.get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            message: text_field("message"),
            resumo: text_field("resumo"),
        }
    }

    /// Text shown to the user after a successful upload.
    pub fn status_message(&self) -> String {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => DEFAULT_SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn summary(&self) -> Option<String> {
        self.resumo.clone().filter(|text| !text.trim().is_empty())
    }
}
