//! # File Filter Module
//!
//! This module contains components for filtering files based on their
//! extension and on path substrings that exclude them from processing.
//!
//! Filters operate on paths relative to the scan root so that the location of
//! the root itself never causes a file to be excluded.

use std::ffi::OsStr;
use std::path::Path;

/// Result of a file filtering operation.
#[derive(Debug)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter {
  /// Determines whether a file should be processed.
  ///
  /// `path` is relative to the scan root.
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Filter that keeps only files with one of a fixed set of extensions.
///
/// Matching is exact and case-sensitive against [`Path::extension`], so
/// `types.d.ts` matches `ts` and `App.TSX` does not match `tsx`.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
  extensions: Vec<String>,
}

impl ExtensionFilter {
  /// Creates a new ExtensionFilter. Extensions are given without the dot.
  pub fn new<I, S>(extensions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      extensions: extensions.into_iter().map(Into::into).collect(),
    }
  }

  /// Returns `true` if the path's extension is in the set.
  pub fn matches(&self, path: &Path) -> bool {
    path
      .extension()
      .and_then(OsStr::to_str)
      .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if self.matches(path) {
      FilterResult::process()
    } else {
      FilterResult::skip("Extension not selected")
    }
  }
}

/// Filter that excludes any path containing one of a set of substrings.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
  substrings: Vec<String>,
}

impl ExclusionFilter {
  /// Creates a new ExclusionFilter from a list of substrings.
  pub fn new<I, S>(substrings: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      substrings: substrings.into_iter().map(Into::into).collect(),
    }
  }

  /// Returns the first exclusion substring found in the path, if any.
  ///
  /// Separators are normalized to `/` before matching so entries such as
  /// `electron/release` behave the same on every platform.
  pub fn matching_exclusion(&self, path: &Path) -> Option<&str> {
    let path_str = path.to_string_lossy().replace('\\', "/");
    self
      .substrings
      .iter()
      .find(|s| path_str.contains(s.as_str()))
      .map(String::as_str)
  }
}

impl FileFilter for ExclusionFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    match self.matching_exclusion(path) {
      Some(substring) => FilterResult::skip(format!("Path contains '{}'", substring)),
      None => FilterResult::process(),
    }
  }
}

/// Filter that combines multiple filters.
///
/// The first filter that rejects a path decides the reason.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  /// Creates a new CompositeFilter with the given filters.
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    for filter in &self.filters {
      let result = filter.should_process(path);
      if !result.should_process {
        return result;
      }
    }
    FilterResult::process()
  }
}

/// Builds the standard filter chain: extension first, then exclusions.
pub fn create_default_filter(extensions: ExtensionFilter, exclusions: ExclusionFilter) -> CompositeFilter {
  CompositeFilter::new(vec![Box::new(extensions), Box::new(exclusions)])
}
