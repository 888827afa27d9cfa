use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected game configuration values.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid width must be at least one cell")]
    ZeroWidth,
    #[error("grid height must be at least one cell")]
    ZeroHeight,
    #[error("tick rate must be at least one tick per second")]
    ZeroTickRate,
    #[error("grid {width}x{height} exceeds the {max}x{max} limit")]
    GridTooLarge { width: u16, height: u16, max: u16 },
}

/// Errors surfaced by the terminal front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
