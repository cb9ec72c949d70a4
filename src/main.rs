use clap::Parser;
use eframe::CreationContext;
use storage_uploader::config::{ConfigError, DEFAULT_BASE_URL};
use storage_uploader::{UploadWidget, UploaderConfig};
use thiserror::Error;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Pick a file and send it to the upload API")]
struct Args {
    /// Base URL of the upload API
    #[arg(long, env = "UPLOADER_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// How verbose the output should be, can be set up to 3 times. Has no effect if RUST_LOG is set
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

fn tracing_init(args: &Args) {
    let default_directive = match args.verbose {
        0 => "storage_uploader=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::builder()
        .with_default_directive(
            default_directive
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        )
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    tracing_init(&args);

    let config = UploaderConfig::new(&args.base_url)?;
    info!(base_url = config.base_url(), "starting uploader");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 480.0])
            .with_min_inner_size([400.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "File Uploader",
        options,
        Box::new(move |_cc: &CreationContext| Box::new(UploadWidget::new(config))),
    )?;

    Ok(())
}
