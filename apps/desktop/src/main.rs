use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{config, HttpUploadClient, SubmissionForm};
use shared::domain::SelectedFile;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Upload a PDF with a code and an email, once")]
struct Args {
    #[arg(long)]
    file: PathBuf,
    #[arg(long, default_value = "")]
    code: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long)]
    upload_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let settings = config::load_settings().resolve(args.upload_url)?;
    let file = SelectedFile::from_path(args.file);
    if !file.has_pdf_extension() {
        tracing::warn!(file = %file.file_name, "selected file does not have a .pdf extension");
    }

    let mut form = SubmissionForm::new();
    form.select_file(Some(file));
    form.set_code(args.code);
    form.set_email(args.email);

    let client = HttpUploadClient::new(settings.upload_url);
    let result = form.submit(&client).await;

    println!("{}", form.status_message());
    if let Some(summary) = form.summary() {
        println!();
        println!("{summary}");
    }

    result.map(|_| ()).context("upload did not succeed")
}
