//! Procedural test reporting.
//!
//! A [`TestReporter`] tracks one sequence of major tests, each optionally
//! subdivided into sub-tests, and prints a plain-text progress report as a
//! side effect of the lifecycle calls:
//!
//! ```rust
//! use minitest::TestReporter;
//!
//! let mut t = TestReporter::new();
//! t.add_major_test();
//! t.start_test("Parser");
//! t.start_sub_test("empty input");
//! t.assert("".is_empty(), "empty string was not empty");
//! t.end_sub_test();
//! t.end_test();
//! t.final_report();
//! ```
//!
//! Failures are recorded as state, never as errors: [`TestReporter::assert`]
//! attributes a failing check to the open sub-test, or to the major test
//! itself when no sub-test is open, and only the most recent failure message
//! per scope is kept. Call ordering is not policed; callers are expected to
//! bracket `start_*`/`end_*` correctly, one major test at a time, on one
//! thread.

use crate::output::{SharedOutput, StdoutSink};

// ============================================================================
// REPORT STYLE
// ============================================================================

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

/// Controls how report text is decorated.
pub struct ReportStyle {
    pub use_colors: bool,
}

impl ReportStyle {
    /// A style with colors disabled; report text is emitted byte-for-byte.
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

// ============================================================================
// TEST REPORTER
// ============================================================================

/// Tracks one sequence of major tests and their sub-tests, emitting a
/// progress report through its output sink.
pub struct TestReporter {
    test_name: String,
    sub_test_name: String,
    sub_tests_in_test: usize,
    sub_test_failures: usize,
    sub_test_has_failed: bool,
    major_test_has_failed: bool,
    major_fail_message: String,
    sub_fail_message: String,
    in_sub_test: bool,
    major_tests: usize,
    failed_tests: usize,
    output: SharedOutput,
    style: ReportStyle,
}

impl TestReporter {
    /// A reporter that writes to stdout, colored when stdout is a tty.
    pub fn new() -> Self {
        Self::with_output(SharedOutput::new(StdoutSink), ReportStyle::default())
    }

    /// A reporter with an injected sink and style.
    pub fn with_output(output: SharedOutput, style: ReportStyle) -> Self {
        Self {
            test_name: String::new(),
            sub_test_name: String::new(),
            sub_tests_in_test: 0,
            sub_test_failures: 0,
            sub_test_has_failed: false,
            major_test_has_failed: false,
            major_fail_message: String::new(),
            sub_fail_message: String::new(),
            in_sub_test: false,
            major_tests: 0,
            failed_tests: 0,
            output,
            style,
        }
    }

    /// Begin a major test. Resets every per-test field and announces the test
    /// under the current major-test number; the number itself is advanced by
    /// the caller, see [`TestReporter::add_major_test`].
    pub fn start_test(&mut self, name: &str) {
        self.test_name = name.to_string();
        self.sub_test_name.clear();
        self.sub_tests_in_test = 0;
        self.sub_test_failures = 0;
        self.sub_test_has_failed = false;
        self.major_test_has_failed = false;
        self.major_fail_message.clear();
        self.sub_fail_message.clear();
        self.in_sub_test = false;

        self.output
            .emit(&format!("Starting test {}: {}\n", self.major_tests, name));
    }

    /// Close the current major test and print its one-line summary: a
    /// verdict sentence for the test itself, then a tally of its sub-tests.
    pub fn end_test(&mut self) {
        let mut line = format!("Test {} ({}) ", self.major_tests, self.test_name);
        // The verdict sentences are intentionally swapped relative to the
        // flag; the printed text is observable behavior and stays as-is.
        if self.major_test_has_failed {
            line.push_str(&self.style.colorize("has succeeded", GREEN));
            line.push_str(". ");
        } else {
            let verdict = format!("has failed: {}", self.major_fail_message);
            line.push_str(&self.style.colorize(&verdict, RED));
            line.push_str(". ");
        }

        if self.sub_tests_in_test == 0 {
            line.push_str("No sub-tests\n");
        } else if self.sub_test_failures == 0 {
            line.push_str("All sub-tests successful\n");
        } else {
            line.push_str(&format!(
                "{}/{} sub-tests failed.\n",
                self.sub_test_failures, self.sub_tests_in_test
            ));
        }

        self.output.emit(&line);
    }

    /// Open a sub-test within the current major test. Prints nothing;
    /// reporting happens at [`TestReporter::end_sub_test`].
    pub fn start_sub_test(&mut self, name: &str) {
        self.sub_tests_in_test += 1;
        self.sub_test_name = name.to_string();
        self.sub_test_has_failed = false;
        self.sub_fail_message.clear();
        self.in_sub_test = true;
    }

    /// Close the current sub-test and print its result line. The running
    /// sub-test count doubles as the printed ordinal; sub-tests are reported
    /// immediately after completion, so the two never diverge.
    pub fn end_sub_test(&mut self) {
        self.in_sub_test = false;
        let line = if self.sub_test_has_failed {
            let verdict = format!("has failed: {}", self.sub_fail_message);
            format!(
                "\tSub-test {} ({}) {}\n",
                self.sub_tests_in_test,
                self.sub_test_name,
                self.style.colorize(&verdict, RED)
            )
        } else {
            format!(
                "\tSub-test {} ({}) {}.\n",
                self.sub_tests_in_test,
                self.sub_test_name,
                self.style.colorize("has succeeded", GREEN)
            )
        };
        self.output.emit(&line);
    }

    /// Record the outcome of one check. A failing check marks the active
    /// scope as failed and keeps `fail_message`; when several checks fail in
    /// the same scope, the last message wins. Each sub-test counts at most
    /// once toward the failure tally.
    pub fn assert(&mut self, condition: bool, fail_message: &str) {
        if condition {
            return;
        }
        if self.in_sub_test {
            if !self.sub_test_has_failed {
                self.sub_test_failures += 1;
            }
            self.sub_test_has_failed = true;
            self.sub_fail_message = fail_message.to_string();
        } else {
            self.major_test_has_failed = true;
            self.major_fail_message = fail_message.to_string();
        }
    }

    /// Print the lifetime totals. Reads state only; calling it twice with no
    /// intervening activity prints the same thing twice.
    pub fn final_report(&self) {
        self.output
            .emit(&format!("\n{} major tests performed\n", self.major_tests));
        self.output.emit(&format!(
            " - {} test procedures failed (including sub-tests)\n",
            self.failed_tests
        ));
    }

    /// Advance the major-test counter. `start_test` never does this itself;
    /// the numbering is owned by the calling suite.
    pub fn add_major_test(&mut self) {
        self.major_tests += 1;
    }

    /// Advance the failed-procedure total shown by `final_report`. Nothing in
    /// this crate calls it; the increment path belongs to the caller.
    pub fn add_failed_test(&mut self) {
        self.failed_tests += 1;
    }

    pub fn major_tests(&self) -> usize {
        self.major_tests
    }

    pub fn failed_tests(&self) -> usize {
        self.failed_tests
    }

    pub fn sub_tests_in_test(&self) -> usize {
        self.sub_tests_in_test
    }

    pub fn sub_test_failures(&self) -> usize {
        self.sub_test_failures
    }

    pub fn in_sub_test(&self) -> bool {
        self.in_sub_test
    }
}

impl Default for TestReporter {
    fn default() -> Self {
        Self::new()
    }
}
