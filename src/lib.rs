pub mod app;
pub mod config;
pub mod upload;
pub mod utils;

pub use app::UploadWidget;
pub use config::UploaderConfig;
