use std::fmt;

use deskmode_events::TraceSink;
use tracing::debug;

/// Target used for desktop mode diagnostic lines
pub const TRACE_TARGET: &str = "deskmode::trace";

/// Forwards diagnostic lines to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTraceSink;

impl TraceSink for TracingTraceSink {
    fn trace(&self, group: &'static str, message: fmt::Arguments<'_>) {
        debug!(target: TRACE_TARGET, group, "{}", message);
    }
}
