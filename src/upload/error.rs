use std::path::PathBuf;
use thiserror::Error;

pub const GENERIC_REJECTION: &str = "Upload failed";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Please select a file first.")]
    NoFileSelected,

    /// Non-success HTTP status. Carries the server's `detail` text, or the
    /// generic message when the payload has none.
    #[error("{0}")]
    Rejected(String),

    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Upload worker stopped before reporting a result")]
    WorkerLost,
}

impl UploadError {
    /// Errors the user caused locally; these are shown without the `Error: ` tag.
    pub fn is_user_input(&self) -> bool {
        matches!(self, UploadError::NoFileSelected)
    }
}
