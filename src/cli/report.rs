//! Progress and summary output.
//!
//! Kept separate from the pipeline logic so the library surface stays usable
//! without side effects beyond the pipeline's own file writes.

use std::io::{self, Write};

use colored::Colorize;

use crate::config::Config;
use crate::pipeline::RunReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the resolved paths before the pipeline starts.
pub fn print_header(config: &Config) {
    println!("Starting translations-to-locales conversion...");
    println!("Input file: {}", config.input_file.display());
    if config.raw {
        println!("Output file: {}", config.raw_output_path().display());
    } else {
        println!("Output directory: {}", config.out_dir.display());
    }
}

/// Print the final summary to stdout.
pub fn print_summary(report: &RunReport) {
    summary_to(report, &mut io::stdout().lock());
}

/// Print the final summary to a custom writer. Useful for testing.
pub fn summary_to<W: Write>(report: &RunReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} All locale files generated. ({} file{})",
        SUCCESS_MARK.green(),
        report.written.len(),
        if report.written.len() == 1 { "" } else { "s" }
    );
}

/// Print a fatal error to stderr.
pub fn print_error(err: &anyhow::Error) {
    error_to(err, &mut io::stderr().lock());
}

/// Print a fatal error to a custom writer. Useful for testing.
pub fn error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(writer, "{} Error: {}", FAILURE_MARK.red(), err);
}
