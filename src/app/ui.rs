use super::{MessageKind, UploadWidget};
use crate::upload::{SelectedFile, UploadTarget};
use crate::utils::file_size::human_size;
use eframe::egui::{self, Align, Color32, RichText};
use rfd::FileDialog;
use tracing::warn;

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 50, 50);
const SUCCESS_COLOR: Color32 = Color32::from_rgb(0, 180, 0);

/// Button caption; only the explicit busy flag decides the in-flight label.
pub(crate) fn button_label(target: UploadTarget, busy: bool) -> String {
    if busy {
        format!("Uploading to {}...", target)
    } else {
        format!("Upload to {}", target)
    }
}

pub(crate) fn selected_file_label(file: &SelectedFile) -> String {
    format!(
        "Selected file: {} ({})",
        file.name,
        human_size(file.size)
    )
}

impl UploadWidget {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let footer_height = 40.0;
            let content_height = ui.available_height() - footer_height;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("File Upload");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Send a file to local or S3 storage")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);
                    self.render_picker(ui);
                    ui.add_space(20.0);
                    self.render_buttons(ui);
                    ui.add_space(20.0);
                    self.render_message(ui);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(10.0);
                self.render_footer(ui);
            });
        });
    }

    fn render_picker(&mut self, ui: &mut egui::Ui) {
        let busy = self.is_busy();

        ui.group(|ui| {
            ui.horizontal(|ui| {
                let pick = ui.add_enabled(!busy, egui::Button::new("📁 Choose File"));
                if pick.clicked() {
                    let selection = FileDialog::new().pick_file().and_then(|path| {
                        SelectedFile::from_path(&path)
                            .map_err(|e| warn!("cannot read {}: {}", path.display(), e))
                            .ok()
                    });
                    self.select_file(selection);
                }

                if let Some(file) = self.selected_file() {
                    ui.label(selected_file_label(file));
                }
            });
        });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let busy = self.is_busy();
        let enabled = self.state.can_submit();

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                for target in UploadTarget::ALL {
                    let button = egui::Button::new(button_label(target, busy))
                        .min_size(egui::vec2(160.0, 36.0));
                    if ui.add_enabled(enabled, button).clicked() {
                        self.submit_upload(target);
                    }
                }
            });
        });
    }

    fn render_message(&self, ui: &mut egui::Ui) {
        let Some(message) = self.message() else {
            return;
        };

        let text = RichText::new(message.text()).monospace();
        let text = match message.kind() {
            MessageKind::Error => text.color(ERROR_COLOR),
            MessageKind::Success => text.color(SUCCESS_COLOR),
            MessageKind::Info => text,
        };

        egui::Frame::none()
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(text);
            });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        let config = self.config();

        ui.horizontal(|ui| {
            ui.label(format!("Ensure the upload API is running on {}", config.base_url()));
            if ui.link("API docs").clicked() {
                if let Err(e) = open::that(config.docs_url()) {
                    warn!("failed to open link: {}", e);
                }
            }
        });
    }
}
