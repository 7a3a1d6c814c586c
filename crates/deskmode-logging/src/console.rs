use deskmode_events::MetricsSink;

use crate::format::{render, LogFormat};

/// Prints every record to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMetricsSink {
    format: LogFormat,
}

impl ConsoleMetricsSink {
    pub fn new(format: LogFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }
}

impl MetricsSink for ConsoleMetricsSink {
    fn write(&self, atom_id: i32, fields: &[i32]) {
        let line = render(self.format, atom_id, fields);
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_every_format() {
        for format in [LogFormat::Pretty, LogFormat::Json, LogFormat::Compact] {
            let sink = ConsoleMetricsSink::new(format);
            assert_eq!(sink.format(), format);
            sink.write(818, &[1, 1, 0, 42]);
            sink.write(819, &[1, 3, 1000, 800, 600, 0, 0, 7, 0, 0, 2]);
            sink.write(5, &[1, 2]);
        }
    }
}
