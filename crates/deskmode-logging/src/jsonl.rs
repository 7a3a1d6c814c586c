use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use deskmode_events::MetricsSink;
use tracing::warn;

use crate::error::SinkError;
use crate::format::record_json_with_timestamp;

/// Appends each record as a JSON line to a file.
///
/// Write failures are reported through `tracing` and otherwise dropped.
pub struct JsonlMetricsSink {
    file: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlMetricsSink {
    /// Open `path` for appending, creating parent directories as needed.
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        if path.file_name().is_none() {
            return Err(SinkError::InvalidPath(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// `<data dir>/deskmode/metrics.jsonl`
    pub fn default_path() -> Result<PathBuf, SinkError> {
        let data_dir = dirs::data_dir().ok_or(SinkError::NoDataDir)?;
        Ok(data_dir.join("deskmode").join("metrics.jsonl"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetricsSink for JsonlMetricsSink {
    fn write(&self, atom_id: i32, fields: &[i32]) {
        let json = record_json_with_timestamp(atom_id, fields);
        let mut writer = self.file.lock().unwrap_or_else(|e| e.into_inner());
        let result = writeln!(writer, "{}", json).and_then(|_| writer.flush());
        if let Err(e) = result {
            warn!(path = %self.path.display(), atom_id, "failed to write metrics record: {}", e);
        }
    }
}
