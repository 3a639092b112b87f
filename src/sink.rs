//! Logging sink port
//!
//! The orchestrator reports progress as plain lines of text through a
//! `LogSink`, keeping the core independent of any output machinery.

/// Receives one line of text per call. No structured format is implied.
pub trait LogSink {
    fn line(&mut self, line: &str);
}

/// Writes lines to stdout.
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Discards all lines.
pub struct NoopSink;

impl LogSink for NoopSink {
    fn line(&mut self, _line: &str) {}
}

/// Records lines for assertions in tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl LogSink for RecordingSink {
    fn line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
