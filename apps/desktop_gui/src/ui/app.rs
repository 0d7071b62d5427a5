use std::path::PathBuf;

use client_core::SubmissionForm;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::SelectedFile;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};

const STATUS_COLOR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub upload_url: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            upload_url: shared::protocol::DEFAULT_UPLOAD_URL.to_string(),
        }
    }
}

pub struct UploadFormApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    form: SubmissionForm,
    upload_url: String,
    worker_status: String,
    next_attempt: u64,
}

fn default_upload_dir() -> Option<PathBuf> {
    dirs::document_dir()
        .or_else(dirs::download_dir)
        .or_else(dirs::home_dir)
}

impl UploadFormApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: SubmissionForm::new(),
            upload_url: startup.upload_url,
            worker_status: "Backend worker starting...".to_string(),
            next_attempt: 0,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::WorkerReady => {
                    self.worker_status = "Backend worker ready".to_string();
                }
                UiEvent::WorkerFailed(reason) => {
                    tracing::error!("backend worker failed: {reason}");
                    self.worker_status = reason;
                }
                UiEvent::UploadFinished { attempt, result } => {
                    match &result {
                        Ok(outcome) => {
                            tracing::info!(attempt, status = outcome.status, "upload finished")
                        }
                        Err(err) => tracing::error!(attempt, "upload failed: {err}"),
                    }
                    self.form.apply_result(&result);
                }
            }
        }
    }

    fn choose_file(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("PDF", &["pdf"]);
        if let Some(dir) = default_upload_dir() {
            dialog = dialog.set_directory(dir);
        }
        let picked = dialog.pick_file().map(SelectedFile::from_path);
        if let Some(file) = &picked {
            tracing::debug!(file = %file.file_name, "pdf selected");
        }
        self.form.select_file(picked);
    }

    fn submit(&mut self) {
        let Ok(request) = self.form.prepare_submission() else {
            return;
        };

        self.next_attempt += 1;
        let attempt = self.next_attempt;
        tracing::info!(
            attempt,
            file = %request.file.file_name,
            endpoint = %self.upload_url,
            "queueing upload"
        );
        if let Err(err) =
            dispatch_backend_command(&self.cmd_tx, BackendCommand::Upload { attempt, request })
        {
            self.form.apply_result(&Err(err));
        }
    }

    fn form_text_field(
        ui: &mut egui::Ui,
        id: &'static str,
        hint: &str,
        value: &str,
    ) -> Option<String> {
        let mut buf = value.to_string();
        let edit = egui::TextEdit::singleline(&mut buf)
            .id_salt(id)
            .hint_text(hint)
            .desired_width(f32::INFINITY);
        let response = ui.add_sized([ui.available_width(), 30.0], edit);
        response.changed().then_some(buf)
    }

    fn show_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let card_width = ui.available_width().clamp(320.0, 440.0);
            ui.add_space(24.0);

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);
                ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 14.0);

                ui.heading(egui::RichText::new("Envie seu PDF").strong().size(24.0));

                egui::Frame::NONE
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(8, 6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            if ui.button("Escolher PDF").clicked() {
                                self.choose_file();
                            }
                            match self.form.selected_file() {
                                Some(file) => ui.label(file.file_name.as_str()),
                                None => ui.weak("Nenhum arquivo selecionado"),
                            };
                        });
                    });

                if let Some(code) =
                    Self::form_text_field(ui, "upload_code", "Digite seu código", self.form.code())
                {
                    self.form.set_code(code);
                }
                if let Some(email) = Self::form_text_field(
                    ui,
                    "upload_email",
                    "Digite seu e-mail",
                    self.form.email(),
                ) {
                    self.form.set_email(email);
                }

                let button = egui::Button::new(
                    egui::RichText::new("Enviar PDF")
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(59, 130, 246))
                .corner_radius(4.0);
                if ui.add(button).clicked() {
                    self.submit();
                }

                if !self.form.status_message().is_empty() {
                    ui.label(egui::RichText::new(self.form.status_message()).color(STATUS_COLOR));
                }

                if let Some(summary) = self.form.summary() {
                    ui.separator();
                    egui::ScrollArea::vertical()
                        .id_salt("upload_summary")
                        .max_height(280.0)
                        .show(ui, |ui| {
                            ui.label(summary);
                        });
                }
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.small(egui::RichText::new(&self.worker_status).weak());
            });
        });
    }
}

impl eframe::App for UploadFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_form(ctx);
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
