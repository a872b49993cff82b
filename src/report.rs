//! Stage summary formatting and printing.
//!
//! This module is separate from the core resolution logic so docmodel can be
//! used as a library without printing side effects. Summaries go to stderr;
//! stdout is reserved for the resolved tree.

use colored::Colorize;

use crate::resolve::PassResult;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Warning mark for consistent output formatting
pub const WARNING_MARK: &str = "\u{26a0}"; // ⚠

/// Print a per-pass summary of the resolution stage.
///
/// One line per pass: applied directive count, plus a skip count when any
/// directive degraded to a no-op. Skips are warnings, never errors; the
/// stage itself cannot fail.
pub fn print_stage_summary(results: &[PassResult]) {
    for result in results {
        let line = format_pass_line(result);
        if result.stats.skipped > 0 {
            eprintln!("{} {}", WARNING_MARK.yellow(), line);
        } else {
            eprintln!("{} {}", SUCCESS_MARK.green(), line);
        }
    }
}

fn format_pass_line(result: &PassResult) -> String {
    let applied = format!(
        "{} directive{} applied",
        result.stats.applied,
        plural(result.stats.applied)
    );
    if result.stats.skipped > 0 {
        format!(
            "{}: {}, {} skipped",
            result.name.bold(),
            applied,
            result.stats.skipped
        )
    } else {
        format!("{}: {}", result.name.bold(), applied)
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
