use std::{collections::HashMap, fs, path::Path};

use anyhow::{anyhow, Context};
use serde::Deserialize;
use shared::protocol::DEFAULT_UPLOAD_URL;
use url::Url;

pub const SETTINGS_FILE: &str = "pdf_upload.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub upload_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upload_url: DEFAULT_UPLOAD_URL.into(),
        }
    }
}

/// Defaults, then `pdf_upload.toml` in the working directory, then the
/// environment.
pub fn load_settings() -> Settings {
    let mut settings = load_settings_file(Path::new(SETTINGS_FILE));
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

pub fn load_settings_file(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("upload_url") {
                settings.upload_url = v.clone();
            }
        }
    }

    settings
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("PDF_UPLOAD_URL") {
        settings.upload_url = v;
    }
    if let Some(v) = lookup("APP__UPLOAD_URL") {
        settings.upload_url = v;
    }
}

pub fn validate_upload_url(raw_upload_url: &str) -> anyhow::Result<String> {
    let raw_upload_url = raw_upload_url.trim();
    let parsed = Url::parse(raw_upload_url)
        .with_context(|| format!("invalid upload url '{raw_upload_url}'"))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed.to_string()),
        other => Err(anyhow!(
            "upload url '{raw_upload_url}' must use http or https, got '{other}'"
        )),
    }
}

impl Settings {
    /// Command-line value wins over everything else; the result is validated.
    pub fn resolve(mut self, cli_upload_url: Option<String>) -> anyhow::Result<Self> {
        if let Some(v) = cli_upload_url {
            self.upload_url = v;
        }
        self.upload_url = validate_upload_url(&self.upload_url)?;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
