pub use crate::output::{NullSink, OutputBuffer, OutputSink, SharedOutput, StdoutSink};
pub use crate::reporter::{ReportStyle, TestReporter};

pub mod output;
pub mod reporter;
