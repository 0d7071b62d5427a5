//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{HttpUploadClient, SubmitResult, UploadTransport};
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, upload_url: String) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let client = HttpUploadClient::new(upload_url);
            tracing::info!(endpoint = %client.upload_url(), "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::WorkerReady);

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Upload { attempt, request } => {
                        // Uploads are not serialized; overlapping attempts race.
                        let client = client.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            tracing::info!(attempt, "upload: attempt started");
                            let result = client.upload(&request).await;
                            report_upload_finished(&ui_tx, attempt, result);
                        });
                    }
                }
            }
            tracing::info!("backend worker stopped: ui command channel closed");
        });
    });
}

/// Never blocks the runtime thread; a result that cannot be queued is dropped.
fn report_upload_finished(ui_tx: &Sender<UiEvent>, attempt: u64, result: SubmitResult) {
    match ui_tx.try_send(UiEvent::UploadFinished { attempt, result }) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            tracing::warn!(attempt, "ui event queue is full; upload result dropped");
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(attempt, "ui closed before upload finished");
        }
    }
}
