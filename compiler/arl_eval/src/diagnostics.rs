//! Advisory diagnostic channel for the evaluator.
//!
//! The only diagnosed condition is arithmetic on incompatible types; the
//! warning is human-readable and never halts execution. Unresolved
//! variables and unparseable fragments degrade to nil silently, with no
//! diagnostic at all.
//!
//! The sink can be directed to different destinations:
//! - Stderr: warning lines on the error stream (default)
//! - Buffer: captured for assertions in tests and embedders
//! - Silent: discarded

use parking_lot::Mutex;

/// Sink that writes warnings to stderr.
///
/// Each warning is also emitted through `tracing` at WARN level, so a
/// subscriber (when the host installs one) sees the structured event.
#[derive(Default)]
pub struct StderrSink;

impl StderrSink {
    /// Emit one warning line.
    pub fn warn(&self, msg: &str) {
        tracing::warn!(target: "arl_eval", "{msg}");
        eprintln!("Warning: {msg}");
    }
}

/// Sink that captures warnings in memory.
pub struct BufferSink {
    warnings: Mutex<Vec<String>>,
}

impl BufferSink {
    /// Create an empty capturing sink.
    pub fn new() -> Self {
        BufferSink {
            warnings: Mutex::new(Vec::new()),
        }
    }

    /// Record one warning.
    pub fn warn(&self, msg: &str) {
        self.warnings.lock().push(msg.to_string());
    }

    /// All captured warnings, in emission order.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }

    /// Discard captured warnings.
    pub fn clear(&self) {
        self.warnings.lock().clear();
    }
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic sink with enum dispatch.
pub enum DiagnosticSink {
    /// Warning lines on stderr (default).
    Stderr(StderrSink),
    /// Captures to memory (testing/embedding).
    Buffer(BufferSink),
    /// Discards all warnings.
    Silent,
}

impl DiagnosticSink {
    /// Create the default stderr sink.
    pub fn stderr() -> Self {
        DiagnosticSink::Stderr(StderrSink)
    }

    /// Create a capturing sink.
    pub fn buffer() -> Self {
        DiagnosticSink::Buffer(BufferSink::new())
    }

    /// Emit one warning.
    pub fn warn(&self, msg: &str) {
        match self {
            Self::Stderr(s) => s.warn(msg),
            Self::Buffer(s) => s.warn(msg),
            Self::Silent => {}
        }
    }

    /// Captured warnings; empty for sinks that don't capture.
    pub fn warnings(&self) -> Vec<String> {
        match self {
            Self::Buffer(s) => s.warnings(),
            Self::Stderr(_) | Self::Silent => Vec::new(),
        }
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::stderr()
    }
}
