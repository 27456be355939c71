//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! Each operation opens and closes its own handle, so no handle outlives the
//! read or the write it belongs to.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the full content of a file as UTF-8.
  ///
  /// Invalid UTF-8 is reported as an `InvalidData` error.
  pub fn read_full_content(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
  }

  /// Replaces a file's content in place.
  ///
  /// Symlinks are resolved first, so the link target is rewritten and the
  /// link itself is left alone. The file is truncated and rewritten through
  /// the same inode, which keeps its owner, permissions and hard links.
  /// A file whose permissions mark it read-only is never written.
  pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    if fs::metadata(&target)?.permissions().readonly() {
      return Err(io::Error::new(io::ErrorKind::PermissionDenied, "file is read-only"));
    }

    let mut file = OpenOptions::new().write(true).truncate(true).open(&target)?;
    file.write_all(content.as_bytes())?;
    file.flush()
  }
}
