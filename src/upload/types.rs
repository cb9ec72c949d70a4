use std::fmt;
use std::path::PathBuf;

/// Storage backend an upload is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    Local,
    S3,
}

impl UploadTarget {
    pub const ALL: [UploadTarget; 2] = [UploadTarget::Local, UploadTarget::S3];

    pub fn path(self) -> &'static str {
        match self {
            UploadTarget::Local => "/upload/local",
            UploadTarget::S3 => "/upload/s3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UploadTarget::Local => "Local",
            UploadTarget::S3 => "S3",
        }
    }
}

impl fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A file picked by the user. The bytes stay on disk until the upload starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
        }
    }

    /// Builds a selection from a path returned by the file dialog.
    pub fn from_path(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let size = std::fs::metadata(&path)?.len();
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Ok(Self { name, path, size })
    }
}
