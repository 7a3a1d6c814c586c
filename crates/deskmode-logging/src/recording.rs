use std::fmt;
use std::sync::{Mutex, MutexGuard};

use deskmode_events::{AtomRecord, MetricsSink, TraceSink};

/// Keeps every forwarded record in memory
#[derive(Debug, Default)]
pub struct RecordingMetricsSink {
    records: Mutex<Vec<(i32, Vec<i32>)>>,
}

impl RecordingMetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<(i32, Vec<i32>)>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// `(atom_id, fields)` pairs in the order they were written
    pub fn records(&self) -> Vec<(i32, Vec<i32>)> {
        self.guard().clone()
    }

    /// Typed view of the recorded writes; undecodable writes are skipped
    pub fn decoded(&self) -> Vec<AtomRecord> {
        self.records()
            .iter()
            .filter_map(|(atom_id, fields)| AtomRecord::decode(*atom_id, fields))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.guard().clear();
    }
}

impl MetricsSink for RecordingMetricsSink {
    fn write(&self, atom_id: i32, fields: &[i32]) {
        self.guard().push((atom_id, fields.to_vec()));
    }
}

/// Keeps every formatted trace line in memory
#[derive(Debug, Default)]
pub struct RecordingTraceSink {
    lines: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingTraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<(&'static str, String)>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// `(group, message)` pairs in the order they were traced
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        self.guard().clone()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.guard().clear();
    }
}

impl TraceSink for RecordingTraceSink {
    fn trace(&self, group: &'static str, message: fmt::Arguments<'_>) {
        self.guard().push((group, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_poisoned_metrics_sink_keeps_recording() {
        let sink = Arc::new(RecordingMetricsSink::new());
        sink.write(818, &[1, 1, 0, 42]);

        let poisoner = Arc::clone(&sink);
        let _ = thread::spawn(move || {
            let _guard = poisoner.records.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(sink.records.is_poisoned());

        sink.write(818, &[2, 0, 6, 42]);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.records()[1], (818, vec![2, 0, 6, 42]));
    }

    #[test]
    fn test_poisoned_trace_sink_keeps_recording() {
        let sink = Arc::new(RecordingTraceSink::new());

        let poisoner = Arc::clone(&sink);
        let _ = thread::spawn(move || {
            let _guard = poisoner.lines.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        sink.trace("GROUP", format_args!("line {}", 1));
        assert_eq!(sink.lines(), vec![("GROUP", "line 1".to_string())]);
    }
}
