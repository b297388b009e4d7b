//! Human-readable fixture reports.

use crate::runner::FixtureReport;
use std::fmt::Write;

/// Format the outcome of one fixture: a status line, then every mismatch
/// and every diagnostic the pipeline reported.
pub fn format_report(fixture_name: &str, report: &FixtureReport) -> String {
    let mut output = String::new();

    let status = if report.passed() { "PASS" } else { "FAIL" };
    writeln!(output, "{}: {}", status, fixture_name).unwrap();

    for mismatch in &report.mismatches {
        writeln!(
            output,
            "  \u{2717} {}: expected `{}`, found `{}`",
            mismatch.check, mismatch.expected, mismatch.actual
        )
        .unwrap();
    }

    for warning in &report.warnings {
        writeln!(output, "  warning: {}", warning).unwrap();
    }

    output
}

/// Format a summary of a whole fixture run.
pub fn format_summary(passed: usize, failed: usize) -> String {
    let status = if failed > 0 { "FAIL" } else { "PASS" };
    format!(
        "{}: {} fixtures, {} passed, {} failed\n",
        status,
        passed + failed,
        passed,
        failed
    )
}
