mod client;
mod error;
mod types;

pub use client::{content_type_for, UploadClient, FILE_FIELD};
pub use error::{UploadError, GENERIC_REJECTION};
pub use types::{SelectedFile, UploadTarget};
