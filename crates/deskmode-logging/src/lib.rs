//! # deskmode-logging
//!
//! Ambient collaborators for the desktop mode event logger.
//!
//! ## Key Types
//!
//! - [`TracingTraceSink`] - Diagnostic lines through `tracing`
//! - [`ConsoleMetricsSink`] - Records to stderr (Pretty, JSON, Compact)
//! - [`JsonlMetricsSink`] - Records appended to a JSON lines file
//! - [`RecordingMetricsSink`] / [`RecordingTraceSink`] - In-memory sinks for tests
//! - [`ProjectConfig`] - `deskmode.toml` loading and logger wiring

mod config;
mod console;
mod error;
mod format;
mod jsonl;
mod recording;
mod trace;

pub use config::{
    ConfiguredLogger, LoggingConfig, MetricsConfig, MetricsTarget, ProjectConfig,
    CONFIG_FILE_NAME,
};
pub use console::ConsoleMetricsSink;
pub use error::SinkError;
pub use format::{record_json, render, LogFormat};
pub use jsonl::JsonlMetricsSink;
pub use recording::{RecordingMetricsSink, RecordingTraceSink};
pub use trace::{TracingTraceSink, TRACE_TARGET};

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing for the application
pub fn init_tracing(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(false))
                .init();
        }
        LogFormat::Pretty | LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false))
                .init();
        }
    }
}

/// Initialize tracing with an additional JSON file layer at `log_path`
pub fn init_tracing_with_file(
    level: &str,
    format: LogFormat,
    log_path: &Path,
) -> Result<WorkerGuard, SinkError> {
    let file_name = log_path
        .file_name()
        .ok_or_else(|| SinkError::InvalidPath(log_path.to_path_buf()))?;
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(false))
                .with(fmt::layer().json().with_ansi(false).with_writer(writer))
                .init();
        }
        LogFormat::Pretty | LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false))
                .with(fmt::layer().json().with_ansi(false).with_writer(writer))
                .init();
        }
    }

    Ok(guard)
}
