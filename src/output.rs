//! Output sinks for report text.
//!
//! Every line the reporter prints flows through the [`OutputSink`] trait, so
//! callers can route the report to stdout, capture it in a buffer, or drop it
//! entirely. Text is written verbatim; the reporter passes complete lines
//! including their trailing newline.

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

// ============================================================================
// OUTPUT SINKS: StdoutSink, OutputBuffer and NullSink implementations
// ============================================================================

// Output sink for report lines, to make I/O testable and injectable.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// StdoutSink: writes report text to stdout for default runner use.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        print!("{text}");
    }
}

/// OutputBuffer: collects output into a String for testing or programmatic
/// capture. The buffer holds exactly the bytes a [`StdoutSink`] would have
/// written.
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

// A null output sink for running without output.
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _text: &str) {}
}

// ============================================================================
// SHARED OUTPUT HANDLE
// ============================================================================

/// Ergonomic, extensible wrapper for shared, mutable output sinks.
///
/// Cloning shares the underlying sink, so a caller can hand one handle to a
/// reporter and keep another to inspect a captured buffer afterwards.
#[derive(Clone)]
pub struct SharedOutput(pub Rc<RefCell<dyn OutputSink>>);

impl SharedOutput {
    /// Create a new SharedOutput from any OutputSink.
    pub fn new<T: OutputSink + 'static>(sink: T) -> Self {
        SharedOutput(Rc::new(RefCell::new(sink)))
    }

    /// Emit output via the sink.
    pub fn emit(&self, text: &str) {
        self.0.borrow_mut().emit(text);
    }

    /// Borrow the sink mutably (for advanced use).
    pub fn borrow_mut(&self) -> RefMut<'_, dyn OutputSink> {
        self.0.borrow_mut()
    }
}
