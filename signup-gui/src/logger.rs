use crate::dir::SignupDirectory;
use std::{fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

pub const GUI_LOG_FILE_NAME: &str = "signup-gui.log";

/// Targets of dependencies that are too chatty to be worth logging.
const FILTERED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "gfx_backend_vulkan",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "sctk",
    "async_io",
    "rustls",
    "hyper",
    "hyper_util",
    "reqwest",
    "tokio",
];

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to install logger: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
    #[error("Invalid LOG_LEVEL: {0}")]
    LogLevel(#[from] filter::LevelParseError),
}

fn is_filtered(target: &str) -> bool {
    FILTERED_TARGETS.iter().any(|t| target.starts_with(t))
}

/// Log to stdout and to `signup-gui.log` in the data directory.
pub fn setup_logger(log_level: LevelFilter, datadir: &SignupDirectory) -> Result<(), LoggerError> {
    let file = File::create(datadir.log_file_path())?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| {
                    !is_filtered(metadata.target())
                })),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, LoggerError> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}
