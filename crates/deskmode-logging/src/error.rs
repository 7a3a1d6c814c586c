use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up a metrics sink or log file
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to open sink output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Not a file path: {}", .0.display())]
    InvalidPath(PathBuf),
}
