//! # Report Module
//!
//! This module records the outcome of each processed file and can write the
//! collected outcomes as a JSON report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Information about a processed file for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// What happened to the file
  pub action: FileAction,
  /// Error detail for failed files
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

/// Possible outcomes for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
  /// The MIT header was replaced (or would be, in a dry run)
  Updated,
  /// The file does not carry the MIT signature
  NoSignature,
  /// The signature is present but the header has an unexpected shape
  PatternMismatch,
  /// Reading or writing the file failed
  Failed,
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Outcome of a whole run, accumulated locally by the processor.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
  /// One entry per candidate file, in processing order
  pub reports: Vec<FileReport>,
  /// Whether files were left untouched on purpose
  pub dry_run: bool,
  /// Wall-clock time spent processing
  pub elapsed: Duration,
}

impl RunSummary {
  fn count(&self, action: FileAction) -> usize {
    self.reports.iter().filter(|r| r.action == action).count()
  }

  /// Number of files updated (or that would be, in a dry run).
  pub fn updated_count(&self) -> usize {
    self.count(FileAction::Updated)
  }

  /// Number of files left unchanged because no header matched.
  pub fn unchanged_count(&self) -> usize {
    self.count(FileAction::NoSignature) + self.count(FileAction::PatternMismatch)
  }

  /// Number of files that could not be read or written.
  pub fn failed_count(&self) -> usize {
    self.count(FileAction::Failed)
  }
}

#[derive(Serialize)]
struct JsonSummary {
  total_files: usize,
  updated: usize,
  unchanged: usize,
  failed: usize,
  dry_run: bool,
  processing_time_seconds: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
  generated_at: String,
  summary: JsonSummary,
  files: &'a [FileReport],
}

/// Writes a JSON report of a run to `output_path`.
pub fn write_json_report(summary: &RunSummary, output_path: &Path) -> Result<()> {
  let content = render_json_report(summary)?;
  fs::write(output_path, content).with_context(|| format!("Failed to write report to {}", output_path.display()))
}

/// Renders a JSON report of a run.
pub fn render_json_report(summary: &RunSummary) -> Result<String> {
  let report = JsonReport {
    generated_at: Local::now().to_rfc3339(),
    summary: JsonSummary {
      total_files: summary.reports.len(),
      updated: summary.updated_count(),
      unchanged: summary.unchanged_count(),
      failed: summary.failed_count(),
      dry_run: summary.dry_run,
      processing_time_seconds: summary.elapsed.as_secs_f64(),
    },
    files: &summary.reports,
  };

  serde_json::to_string_pretty(&report).context("Failed to serialize report")
}
