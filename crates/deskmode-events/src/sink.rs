//! Collaborators the encoder forwards to.
//!
//! Neither trait returns a result: delivery, batching and failure handling
//! belong to the sink implementation.

use std::fmt;
use std::sync::Arc;

/// Diagnostic group for desktop mode trace lines
pub const DESKTOP_MODE_LOG_GROUP: &str = "WM_SHELL_DESKTOP_MODE";

/// Verbose, human-readable diagnostics
pub trait TraceSink: Send + Sync {
    fn trace(&self, group: &'static str, message: fmt::Arguments<'_>);
}

/// Fixed-arity metrics records keyed by atom id
pub trait MetricsSink: Send + Sync {
    fn write(&self, atom_id: i32, fields: &[i32]);
}

/// Discards every trace line
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTraceSink;

impl TraceSink for NoopTraceSink {
    fn trace(&self, _group: &'static str, _message: fmt::Arguments<'_>) {}
}

/// Drops every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetricsSink;

impl MetricsSink for NoopMetricsSink {
    fn write(&self, _atom_id: i32, _fields: &[i32]) {}
}

impl<T: TraceSink + ?Sized> TraceSink for Arc<T> {
    fn trace(&self, group: &'static str, message: fmt::Arguments<'_>) {
        (**self).trace(group, message)
    }
}

impl<T: TraceSink + ?Sized> TraceSink for Box<T> {
    fn trace(&self, group: &'static str, message: fmt::Arguments<'_>) {
        (**self).trace(group, message)
    }
}

impl<T: MetricsSink + ?Sized> MetricsSink for Arc<T> {
    fn write(&self, atom_id: i32, fields: &[i32]) {
        (**self).write(atom_id, fields)
    }
}

impl<T: MetricsSink + ?Sized> MetricsSink for Box<T> {
    fn write(&self, atom_id: i32, fields: &[i32]) {
        (**self).write(atom_id, fields)
    }
}
