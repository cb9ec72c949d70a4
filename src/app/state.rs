use crate::upload::{SelectedFile, UploadError, UploadTarget};
use serde_json::Value;
use std::sync::mpsc::Receiver;

pub const UPLOADING_TEXT: &str = "Uploading...";
pub const SUCCESS_PREFIX: &str = "Upload successful! ";
pub const ERROR_PREFIX: &str = "Error: ";

/// Largest integer an f64 holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rewrites whole-number floats as integers, so `1.0` shows as `1`.
fn normalize_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => Value::from(f as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), normalize_numbers(item)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading(UploadTarget),
}

impl UploadState {
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadState::Uploading(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    kind: MessageKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Info,
        }
    }

    pub fn uploading() -> Self {
        Self::info(UPLOADING_TEXT)
    }

    pub fn success(body: &Value) -> Self {
        let body = normalize_numbers(body);
        let pretty = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
        Self {
            text: format!("{SUCCESS_PREFIX}{pretty}"),
            kind: MessageKind::Success,
        }
    }

    pub fn error(error: &UploadError) -> Self {
        if error.is_user_input() {
            return Self::info(error.to_string());
        }
        Self {
            text: format!("{ERROR_PREFIX}{error}"),
            kind: MessageKind::Error,
        }
    }

    pub fn from_outcome(outcome: &Result<Value, UploadError>) -> Self {
        match outcome {
            Ok(body) => Self::success(body),
            Err(e) => Self::error(e),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

#[derive(Default)]
pub(crate) struct WidgetState {
    pub(crate) upload: UploadState,
    pub(crate) selected_file: Option<SelectedFile>,
    pub(crate) message: Option<StatusMessage>,
    pub(crate) result_receiver: Option<Receiver<Result<Value, UploadError>>>,
}

impl WidgetState {
    /// Returns to Idle and drops the selection, whatever the outcome was.
    pub(crate) fn settle(&mut self, outcome: &Result<Value, UploadError>) {
        self.message = Some(StatusMessage::from_outcome(outcome));
        self.upload = UploadState::Idle;
        self.selected_file = None;
        self.result_receiver = None;
    }

    pub(crate) fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.upload.is_busy()
    }
}
