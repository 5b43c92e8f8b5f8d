use std::{
    io::Write,
    sync::{Arc, Mutex, PoisonError},
};

/// Sink for fully formatted log lines.
pub trait LogWriter: Send {
    fn regular(&mut self, line: &str);
    fn flush(&mut self);
}

#[derive(Default, Debug)]
pub struct LogStderr;

impl LogWriter for LogStderr {
    fn regular(&mut self, line: &str) {
        writeln!(std::io::stderr().lock(), "{line}").ok();
    }

    fn flush(&mut self) {
        std::io::stderr().flush().ok();
    }
}

#[derive(Default, Debug)]
pub struct LogStdout;

impl LogWriter for LogStdout {
    fn regular(&mut self, line: &str) {
        writeln!(std::io::stdout().lock(), "{line}").ok();
    }

    fn flush(&mut self) {
        std::io::stdout().flush().ok();
    }
}

/// In-memory writer. Clones share the same lines.
#[derive(Clone, Default, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogWriter for LogBuffer {
    fn regular(&mut self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.into());
    }

    fn flush(&mut self) {}
}

/// Where a handler sends its lines.
#[derive(Clone, Default, Debug)]
pub enum LogTarget {
    #[default]
    Stderr,
    Stdout,
    Buffer(LogBuffer),
}

impl LogTarget {
    pub fn into_writer(self) -> Box<dyn LogWriter> {
        match self {
            LogTarget::Stderr => Box::new(LogStderr),
            LogTarget::Stdout => Box::new(LogStdout),
            LogTarget::Buffer(buffer) => Box::new(buffer),
        }
    }
}

#[test]
fn test_log_buffer() {
    let buffer = LogBuffer::new();
    let mut writer = LogTarget::Buffer(buffer.clone()).into_writer();
    writer.regular("Hello, world!");
    writer.regular("rust is awesome !");
    writer.flush();
    assert_eq!(buffer.lines(), vec!["Hello, world!", "rust is awesome !"]);
    buffer.clear();
    assert!(buffer.lines().is_empty());
}

#[test]
fn test_log_stderr() {
    let mut log_stderr = LogTarget::default().into_writer();
    log_stderr.regular("Hello, world!");
    log_stderr.flush();
}
