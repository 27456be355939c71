//! # Output Module
//!
//! This module centralizes the user-facing console output of relicense that
//! is not emitted per file by the processor.
//!
//! - **Scriptable**: stdout carries only the updated-file lines and the total
//! - **Progressive**: more detail with `-v`, silence with `-q`
//! - Errors always go to stderr, even in quiet mode

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::RunSummary;

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the per-file error line to stderr.
pub fn print_file_error(path: &str, error: impl Display) {
  eprintln!(
    "{} {}: {}",
    "Error processing".if_supports_color(Stream::Stderr, |s| s.red()),
    path,
    error
  );
}

/// Print the final total line.
///
/// In verbose mode the unchanged and failed counts and the timing follow on
/// a second line.
pub fn print_summary(summary: &RunSummary) {
  if is_quiet() {
    return;
  }

  let label = if summary.dry_run {
    "Total files that would be updated"
  } else {
    "Total files updated"
  };
  println!("{}: {}", label, summary.updated_count());

  if is_verbose() {
    println!(
      "{} unchanged, {} failed ({:.2}s)",
      summary.unchanged_count(),
      summary.failed_count().if_supports_color(Stream::Stdout, |s| s.red()),
      summary.elapsed.as_secs_f64()
    );
  }
}
