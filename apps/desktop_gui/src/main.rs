mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{StartupConfig, UploadFormApp};

#[derive(Parser, Debug)]
#[command(about = "Desktop form that uploads a PDF with a code and an email")]
struct Args {
    /// Overrides the upload endpoint from pdf_upload.toml / environment.
    #[arg(long)]
    upload_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();
    let settings = client_core::config::load_settings().resolve(args.upload_url)?;
    tracing::info!(endpoint = %settings.upload_url, "starting pdf upload form");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.upload_url.clone());

    let startup = StartupConfig {
        upload_url: settings.upload_url,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Envie seu PDF")
            .with_inner_size([560.0, 640.0])
            .with_min_inner_size([380.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Envie seu PDF",
        options,
        Box::new(move |_cc| Ok(Box::new(UploadFormApp::new(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow!("desktop gui exited with error: {err}"))
}
