use crate::config::UploaderConfig;
use crate::upload::error::{UploadError, GENERIC_REJECTION};
use crate::upload::types::{SelectedFile, UploadTarget};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Multipart field the upload API reads the file from.
pub const FILE_FIELD: &str = "file";

/// MIME type sent with the file part, guessed from its name the way a
/// browser form does.
pub fn content_type_for(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Text shown for a rejected upload: the payload's `detail` when it carries
/// one, the generic message otherwise. Falsy details count as missing.
fn rejection_message(body: &Value) -> String {
    match body.get("detail") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => GENERIC_REJECTION.to_string(),
        Some(Value::String(detail)) if detail.is_empty() => GENERIC_REJECTION.to_string(),
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => GENERIC_REJECTION.to_string(),
        Some(other) => other.to_string(),
    }
}

#[derive(Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    config: UploaderConfig,
}

impl UploadClient {
    pub fn new(config: UploaderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn endpoint(&self, target: UploadTarget) -> String {
        format!("{}{}", self.config.base_url(), target.path())
    }

    /// Sends `file` to the endpoint for `target` and returns the decoded
    /// success body.
    pub async fn upload(
        &self,
        target: UploadTarget,
        file: &SelectedFile,
    ) -> Result<Value, UploadError> {
        let content = tokio::fs::read(&file.path)
            .await
            .map_err(|source| UploadError::ReadFile {
                path: file.path.clone(),
                source,
            })?;

        let mime = content_type_for(&file.name);
        let part = Part::bytes(content)
            .file_name(file.name.clone())
            .mime_str(&mime)?;
        let form = Form::new().part(FILE_FIELD, part);
        let url = self.endpoint(target);
        debug!(%url, file = %file.name, size = file.size, %mime, "sending upload request");

        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let error: Value = serde_json::from_slice(&body)?;
            let message = rejection_message(&error);
            warn!(%status, %target, detail = %message, "upload rejected");
            return Err(UploadError::Rejected(message));
        }

        let value: Value = serde_json::from_slice(&body)?;
        info!(%status, %target, file = %file.name, "upload accepted");
        Ok(value)
    }
}
