//! Project configuration file support for deskmode.
//!
//! Loads configuration from `deskmode.toml` in a given directory.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;

use deskmode_events::{DesktopModeEventLogger, MetricsSink, NoopMetricsSink};

use crate::console::ConsoleMetricsSink;
use crate::format::LogFormat;
use crate::jsonl::JsonlMetricsSink;
use crate::trace::TracingTraceSink;

/// The config file name
pub const CONFIG_FILE_NAME: &str = "deskmode.toml";

const DEFAULT_LEVEL: &str = "info";

/// Project-level configuration loaded from `deskmode.toml`
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// `[logging]` table
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Tracing filter directive, overridden by `RUST_LOG`
    pub level: Option<String>,
    /// pretty, json or compact
    pub format: Option<String>,
    /// Also write tracing output to this file
    pub file: Option<PathBuf>,
}

/// `[metrics]` table
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    /// console, jsonl or discard
    pub sink: Option<String>,
    /// Output file for the jsonl sink
    pub path: Option<PathBuf>,
}

/// Where metrics records end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsTarget {
    Console(LogFormat),
    Jsonl(PathBuf),
    Discard,
}

pub type ConfiguredLogger = DesktopModeEventLogger<TracingTraceSink, Box<dyn MetricsSink>>;

impl ProjectConfig {
    /// Load configuration from the given directory.
    ///
    /// Returns:
    /// - `Ok(Some(config))` if file exists and parses successfully
    /// - `Ok(None)` if file does not exist
    /// - `Err(...)` if file exists but fails to parse (hard error)
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(Some(config))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Tracing filter, defaulting to `info`
    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or(DEFAULT_LEVEL)
    }

    pub fn log_format(&self) -> Result<LogFormat> {
        match self.logging.format.as_deref() {
            Some(format) => format.parse().map_err(|e: String| anyhow!(e)),
            None => Ok(LogFormat::default()),
        }
    }

    /// Resolve the `[metrics]` table.
    /// The console sink renders in the `[logging]` format.
    pub fn metrics_target(&self) -> Result<MetricsTarget> {
        match self.metrics.sink.as_deref().map(str::to_lowercase).as_deref() {
            None | Some("console") => Ok(MetricsTarget::Console(self.log_format()?)),
            Some("jsonl") => {
                let path = match &self.metrics.path {
                    Some(path) => path.clone(),
                    None => JsonlMetricsSink::default_path()?,
                };
                Ok(MetricsTarget::Jsonl(path))
            }
            Some("discard") => Ok(MetricsTarget::Discard),
            Some(other) => Err(anyhow!("Unknown metrics sink: {}", other)),
        }
    }

    pub fn build_metrics_sink(&self) -> Result<Box<dyn MetricsSink>> {
        let sink: Box<dyn MetricsSink> = match self.metrics_target()? {
            MetricsTarget::Console(format) => Box::new(ConsoleMetricsSink::new(format)),
            MetricsTarget::Jsonl(path) => Box::new(
                JsonlMetricsSink::create(&path)
                    .with_context(|| format!("Failed to open {}", path.display()))?,
            ),
            MetricsTarget::Discard => Box::new(NoopMetricsSink),
        };
        Ok(sink)
    }

    /// Build an event logger tracing through `tracing` and writing to the
    /// configured metrics sink
    pub fn build_logger(&self) -> Result<ConfiguredLogger> {
        Ok(DesktopModeEventLogger::new(
            TracingTraceSink,
            self.build_metrics_sink()?,
        ))
    }

    /// Install the global tracing subscriber described by `[logging]`.
    ///
    /// The returned guard must be held for as long as file logging is needed.
    pub fn init_tracing(&self) -> Result<Option<WorkerGuard>> {
        let format = self.log_format()?;
        match &self.logging.file {
            Some(path) => {
                let guard = crate::init_tracing_with_file(self.log_level(), format, path)
                    .with_context(|| format!("Failed to open log file {}", path.display()))?;
                Ok(Some(guard))
            }
            None => {
                crate::init_tracing(self.log_level(), format);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(ProjectConfig::load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[logging\nlevel=").unwrap();

        let err = ProjectConfig::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ProjectConfig::parse("[metrics]\nbatch = 10\n").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = ProjectConfig::parse("").unwrap();
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.log_format().unwrap(), LogFormat::Pretty);
        assert_eq!(
            config.metrics_target().unwrap(),
            MetricsTarget::Console(LogFormat::Pretty)
        );
    }

    #[test]
    fn test_console_uses_logging_format() {
        let config = ProjectConfig::parse("[logging]\nformat = \"compact\"\n").unwrap();
        assert_eq!(
            config.metrics_target().unwrap(),
            MetricsTarget::Console(LogFormat::Compact)
        );
    }

    #[test]
    fn test_jsonl_target_with_path() {
        let config =
            ProjectConfig::parse("[metrics]\nsink = \"jsonl\"\npath = \"/tmp/m.jsonl\"\n").unwrap();
        assert_eq!(
            config.metrics_target().unwrap(),
            MetricsTarget::Jsonl(PathBuf::from("/tmp/m.jsonl"))
        );
    }

    #[test]
    fn test_discard_target() {
        let config = ProjectConfig::parse("[metrics]\nsink = \"Discard\"\n").unwrap();
        assert_eq!(config.metrics_target().unwrap(), MetricsTarget::Discard);
    }

    #[test]
    fn test_unknown_sink_and_format() {
        let config = ProjectConfig::parse("[metrics]\nsink = \"statsd\"\n").unwrap();
        assert!(config.metrics_target().is_err());

        let config = ProjectConfig::parse("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(config.log_format().is_err());
    }
}
