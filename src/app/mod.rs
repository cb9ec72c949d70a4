mod state;
mod ui;

use crate::config::UploaderConfig;
use crate::upload::{SelectedFile, UploadClient, UploadError, UploadTarget};
use eframe::{egui, App};
use state::WidgetState;
pub use state::{
    MessageKind, StatusMessage, UploadState, ERROR_PREFIX, SUCCESS_PREFIX, UPLOADING_TEXT,
};
use std::sync::mpsc as std_mpsc;
use tracing::{debug, error, info, warn};

/// Single-file upload widget.
///
/// Its internal state and result channel are not part of the public API:
///
/// ```compile_fail
/// use storage_uploader::app::WidgetState;
/// ```
pub struct UploadWidget {
    config: UploaderConfig,
    state: WidgetState,
}

impl UploadWidget {
    pub fn new(config: UploaderConfig) -> Self {
        info!(base_url = config.base_url(), "initializing upload widget");
        Self {
            config,
            state: WidgetState::default(),
        }
    }

    pub fn config(&self) -> &UploaderConfig {
        &self.config
    }

    pub fn upload_state(&self) -> UploadState {
        self.state.upload
    }

    pub fn is_busy(&self) -> bool {
        self.state.upload.is_busy()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.state.selected_file.as_ref()
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.state.message.as_ref()
    }

    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        if self.is_busy() {
            warn!("ignoring file selection while an upload is in flight");
            return;
        }

        match file {
            Some(file) => {
                debug!(file = %file.name, size = file.size, "file selected");
                self.state.selected_file = Some(file);
                self.state.message = None;
            }
            None => {
                debug!("file selection cleared");
                self.state.selected_file = None;
            }
        }
    }

    /// Starts uploading the selected file to `target` on a background thread.
    /// The outcome is applied by [`UploadWidget::poll`].
    pub fn submit_upload(&mut self, target: UploadTarget) {
        if self.is_busy() {
            warn!(%target, "upload already in progress, ignoring request");
            return;
        }

        let Some(file) = self.state.selected_file.clone() else {
            info!(%target, "upload requested without a selected file");
            self.state.message = Some(StatusMessage::error(&UploadError::NoFileSelected));
            return;
        };

        info!(%target, file = %file.name, "starting upload");
        self.state.upload = UploadState::Uploading(target);
        self.state.message = Some(StatusMessage::uploading());

        let (sender, receiver) = std_mpsc::channel();
        self.state.result_receiver = Some(receiver);

        let config = self.config.clone();
        std::thread::spawn(move || {
            let outcome = match tokio::runtime::Runtime::new() {
                // The HTTP client and its connection pool live and die with this runtime.
                Ok(rt) => rt.block_on(async move {
                    UploadClient::new(config).upload(target, &file).await
                }),
                Err(e) => {
                    error!("failed to start async runtime: {}", e);
                    Err(UploadError::WorkerLost)
                }
            };
            let _ = sender.send(outcome);
        });
    }

    /// Applies the result of the in-flight upload if it has settled.
    /// Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.state.result_receiver else {
            return false;
        };

        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(std_mpsc::TryRecvError::Empty) => return false,
            Err(std_mpsc::TryRecvError::Disconnected) => Err(UploadError::WorkerLost),
        };

        match &outcome {
            Ok(_) => info!("upload finished"),
            Err(e) => warn!("upload failed: {}", e),
        }
        self.state.settle(&outcome);
        true
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.poll() {
            ctx.request_repaint();
        } else if self.is_busy() {
            // Keep polling until the worker reports back.
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}

impl App for UploadWidget {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
