//! # Processor Module
//!
//! This module contains the core functionality: collecting candidate files
//! under a root directory and replacing their MIT headers.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`file_collector`] - Directory traversal and filtering
//!
//! The [`Processor`] struct is the main entry point. Files are processed one
//! at a time; a failure on one file is recorded and the run moves on.

mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
pub use file_collector::{FileCollector, display_path};
pub use file_io::FileIO;
use tracing::{debug, trace};

use crate::config::Config;
use crate::diff::DiffManager;
use crate::file_filter::{ExclusionFilter, ExtensionFilter};
use crate::header::{HeaderRewriter, Rewrite};
use crate::info_log;
use crate::output::print_file_error;
use crate::report::{FileAction, FileReport, RunSummary};

/// Error raised while processing a single file.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
  /// The file could not be read or is not valid UTF-8.
  #[error("failed to read file: {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The rewritten content could not be written back.
  #[error("failed to write file: {source}")]
  Write { path: PathBuf, source: std::io::Error },
}

impl ProcessError {
  /// The file the error belongs to.
  pub fn path(&self) -> &Path {
    match self {
      Self::Read { path, .. } | Self::Write { path, .. } => path,
    }
  }
}

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnchangedReason {
  /// The MIT signature phrase is absent.
  NoSignature,
  /// The signature is present but no header block has the expected shape.
  PatternMismatch,
}

/// Outcome of processing one file.
#[derive(Debug)]
pub enum FileOutcome {
  /// The header was replaced (or would be, in a dry run).
  Updated,
  /// No replacement applies.
  Unchanged(UnchangedReason),
  /// Reading or writing failed.
  Failed(ProcessError),
}

impl FileOutcome {
  fn to_report(&self, path: &Path) -> FileReport {
    let (action, error) = match self {
      Self::Updated => (FileAction::Updated, None),
      Self::Unchanged(UnchangedReason::NoSignature) => (FileAction::NoSignature, None),
      Self::Unchanged(UnchangedReason::PatternMismatch) => (FileAction::PatternMismatch, None),
      Self::Failed(e) => (FileAction::Failed, Some(e.to_string())),
    };
    FileReport {
      path: path.to_path_buf(),
      action,
      error,
    }
  }
}

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  /// Directory to scan
  pub root: PathBuf,
  /// Extensions to scan, without the leading dot
  pub extensions: Vec<String>,
  /// Path substrings that exclude files and directories
  pub exclusions: Vec<String>,
  /// Header detection and replacement
  pub rewriter: HeaderRewriter,
  /// Report changes without writing them
  pub dry_run: bool,
  /// Optional diff output
  pub diff_manager: Option<DiffManager>,
}

impl ProcessorConfig {
  /// Creates a ProcessorConfig for `root` with the default extensions,
  /// exclusions and header.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     dry_run: true,
  ///     ..ProcessorConfig::new(root)
  /// }
  /// ```
  pub fn new(root: PathBuf) -> Self {
    Self::from_config(root, Config::default(), HeaderRewriter::new())
  }

  /// Creates a ProcessorConfig from a loaded [`Config`].
  pub fn from_config(root: PathBuf, config: Config, rewriter: HeaderRewriter) -> Self {
    Self {
      root,
      extensions: config.extensions,
      exclusions: config.exclude,
      rewriter,
      dry_run: false,
      diff_manager: None,
    }
  }
}

/// Processor for replacing MIT headers under a root directory.
///
/// The `Processor` is responsible for:
/// - Collecting candidate files (by extension, minus exclusions)
/// - Replacing the first MIT header block in each file
/// - Reporting every updated or failed file
/// - Accumulating per-file outcomes into a [`RunSummary`]
pub struct Processor {
  /// Collector for candidate files
  file_collector: FileCollector,

  /// Header detection and replacement
  rewriter: HeaderRewriter,

  /// Whether to leave files untouched
  dry_run: bool,

  /// Manager for diff output
  diff_manager: DiffManager,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  pub fn new(config: ProcessorConfig) -> Self {
    let file_collector = FileCollector::new(
      config.root,
      ExtensionFilter::new(config.extensions),
      ExclusionFilter::new(config.exclusions),
    );

    Self {
      file_collector,
      rewriter: config.rewriter,
      dry_run: config.dry_run,
      diff_manager: config.diff_manager.unwrap_or_default(),
    }
  }

  /// The directory being scanned.
  pub fn root(&self) -> &Path {
    self.file_collector.root()
  }

  /// Collects the candidate files without processing them.
  pub fn collect_files(&self) -> Vec<PathBuf> {
    self.file_collector.collect()
  }

  /// Processes every candidate file and returns the accumulated outcomes.
  ///
  /// Prints `Updated: <path>` (or `Would update: <path>` in a dry run) for
  /// each updated file and an error line for each failure. Never stops early.
  pub fn run(&self) -> RunSummary {
    let start_time = Instant::now();
    let files = self.collect_files();
    debug!("Processing {} files", files.len());

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
      let outcome = self.process_file(&path);
      match &outcome {
        FileOutcome::Updated if self.dry_run => info_log!("Would update: {}", display_path(&path)),
        FileOutcome::Updated => info_log!("Updated: {}", display_path(&path)),
        FileOutcome::Unchanged(reason) => trace!("Unchanged: {} ({:?})", path.display(), reason),
        FileOutcome::Failed(e) => print_file_error(&display_path(e.path()), e),
      }
      reports.push(outcome.to_report(&path));
    }

    RunSummary {
      reports,
      dry_run: self.dry_run,
      elapsed: start_time.elapsed(),
    }
  }

  /// Processes a single file.
  ///
  /// The file is read once; it is written only when its header was replaced
  /// and the processor is not in dry-run mode.
  pub fn process_file(&self, path: &Path) -> FileOutcome {
    let content = match FileIO::read_full_content(path) {
      Ok(content) => content,
      Err(source) => {
        return FileOutcome::Failed(ProcessError::Read {
          path: path.to_path_buf(),
          source,
        });
      }
    };

    let new_content = match self.rewriter.rewrite(&content) {
      Rewrite::Replaced(new_content) => new_content,
      Rewrite::NoSignature => return FileOutcome::Unchanged(UnchangedReason::NoSignature),
      Rewrite::PatternMismatch => return FileOutcome::Unchanged(UnchangedReason::PatternMismatch),
    };

    if let Err(e) = self.diff_manager.display_diff(path, &content, &new_content) {
      eprintln!("Warning: Failed to display diff for {}: {}", path.display(), e);
    }

    if self.dry_run {
      return FileOutcome::Updated;
    }

    match FileIO::write_file(path, &new_content) {
      Ok(()) => FileOutcome::Updated,
      Err(source) => FileOutcome::Failed(ProcessError::Write {
        path: path.to_path_buf(),
        source,
      }),
    }
  }
}

/// Replaces MIT headers under `root` using the default settings.
pub fn process_directory(root: &Path) -> Result<RunSummary> {
  if !root.is_dir() {
    anyhow::bail!("Not a directory: {}", root.display());
  }
  Ok(Processor::new(ProcessorConfig::new(root.to_path_buf())).run())
}
