// Built-in smoke suite for the reporter: drives the full lifecycle against a
// handful of checks and exits nonzero if any sub-test failed.
// Usage: cargo run --bin selfcheck [filter]

use std::env;
use std::process;

use minitest::TestReporter;

const SUITE: &[(&str, fn(&mut TestReporter))] = &[
    ("Integer arithmetic", integer_arithmetic),
    ("String handling", string_handling),
];

fn main() {
    let filter = env::args().nth(1).map(|f| f.to_lowercase());

    let mut reporter = TestReporter::new();
    let mut failed_sub_tests = 0;

    for (name, run) in SUITE {
        if let Some(ref f) = filter {
            if !name.to_lowercase().contains(f.as_str()) {
                continue;
            }
        }
        reporter.add_major_test();
        reporter.start_test(name);
        run(&mut reporter);
        reporter.end_test();
        failed_sub_tests += reporter.sub_test_failures();
    }

    reporter.final_report();

    if failed_sub_tests > 0 {
        process::exit(1);
    }
}

fn integer_arithmetic(t: &mut TestReporter) {
    t.start_sub_test("addition");
    let sum = 19 + 23;
    t.assert(sum == 42, "19 + 23 did not equal 42");
    t.end_sub_test();

    t.start_sub_test("saturating subtraction");
    let diff = 3usize.saturating_sub(5);
    t.assert(diff == 0, "saturating_sub fell below zero");
    t.end_sub_test();
}

fn string_handling(t: &mut TestReporter) {
    t.start_sub_test("concatenation");
    let joined = format!("{}{}", "mini", "test");
    t.assert(joined == "minitest", "concatenation produced the wrong string");
    t.end_sub_test();

    t.start_sub_test("trim");
    let trimmed = "  padded  ".trim();
    t.assert(trimmed == "padded", "trim left whitespace behind");
    t.end_sub_test();
}
