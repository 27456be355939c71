//! # File Collector Module
//!
//! This module walks the scan root and collects the candidate files, applying
//! the extension and exclusion filters.

use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::file_filter::{CompositeFilter, ExclusionFilter, ExtensionFilter, FileFilter, create_default_filter};

/// File collector for directory traversal.
///
/// The `FileCollector` handles:
/// - Recursive traversal of the root directory
/// - Pruning of excluded directories before they are read
/// - Filtering of regular files by extension and exclusion substrings
pub struct FileCollector {
  /// Root of the scan
  root: PathBuf,

  /// Used on directories to prune excluded subtrees
  exclusions: ExclusionFilter,

  /// Applied to every regular file
  filter: CompositeFilter,
}

impl FileCollector {
  /// Creates a new FileCollector.
  pub fn new(root: PathBuf, extensions: ExtensionFilter, exclusions: ExclusionFilter) -> Self {
    let filter = create_default_filter(extensions, exclusions.clone());
    Self {
      root,
      exclusions,
      filter,
    }
  }

  /// The directory being scanned.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Traverses the root recursively and returns the candidate files, sorted.
  ///
  /// Symlinked directories are not descended into. A symlink is returned when
  /// it resolves to a regular file; broken links and links to anything else
  /// are skipped. Entries that cannot be read are logged and skipped.
  pub fn collect(&self) -> Vec<PathBuf> {
    debug!("Scanning directory: {}", self.root.display());
    let start_time = std::time::Instant::now();

    let mut files = Vec::new();

    let walker = WalkDir::new(&self.root).follow_links(false).into_iter().filter_entry(|entry| {
      if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
      }
      let relative = self.relative_path(entry.path());
      match self.exclusions.matching_exclusion(relative) {
        Some(substring) => {
          trace!("Pruning: {} (contains '{}')", entry.path().display(), substring);
          false
        }
        None => true,
      }
    });

    for entry in walker {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          warn!("Skipping unreadable entry: {}", e);
          continue;
        }
      };

      if !Self::is_regular_file(&entry) {
        continue;
      }

      let relative = self.relative_path(entry.path());
      let result = self.filter.should_process(relative);
      if result.should_process {
        files.push(entry.into_path());
      } else {
        trace!(
          "Skipping: {} ({})",
          entry.path().display(),
          result.reason.as_deref().unwrap_or("Unknown reason")
        );
      }
    }

    files.sort();

    debug!(
      "Found {} candidate files in {}ms",
      files.len(),
      start_time.elapsed().as_millis()
    );

    files
  }

  fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if !file_type.is_symlink() {
      return file_type.is_file();
    }
    match std::fs::metadata(entry.path()) {
      Ok(metadata) => metadata.is_file(),
      Err(e) => {
        trace!("Skipping broken symlink: {} ({})", entry.path().display(), e);
        false
      }
    }
  }

  fn relative_path<'a>(&self, path: &'a Path) -> &'a Path {
    path.strip_prefix(&self.root).unwrap_or(path)
  }
}

/// Formats a path for display, dropping a leading `./` component.
pub fn display_path(path: &Path) -> String {
  path.strip_prefix(".").unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;
  use crate::config::{DEFAULT_EXCLUSIONS, DEFAULT_EXTENSIONS};

  fn default_collector(root: &Path) -> FileCollector {
    FileCollector::new(
      root.to_path_buf(),
      ExtensionFilter::new(DEFAULT_EXTENSIONS.iter().copied()),
      ExclusionFilter::new(DEFAULT_EXCLUSIONS.iter().copied()),
    )
  }

  fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "x").unwrap();
  }

  fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
      .iter()
      .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
      .collect()
  }

  #[test]
  fn test_collects_matching_extensions_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "src/b.ts");
    touch(root, "src/a.tsx");
    touch(root, "lib/c.js");
    touch(root, "lib/d.jsx");
    touch(root, "README.md");
    touch(root, "src/style.css");

    let files = default_collector(root).collect();
    assert_eq!(
      relative_names(root, &files),
      vec!["lib/c.js", "lib/d.jsx", "src/a.tsx", "src/b.ts"]
    );
  }

  #[test]
  fn test_excluded_directories_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "node_modules/react/index.js");
    touch(root, "dist/bundle.js");
    touch(root, "electron/release/main.js");
    touch(root, "electron/app/main.js");
    touch(root, "electron/main.js");
    touch(root, ".git/hooks/hook.js");
    touch(root, "src/index.ts");

    let files = default_collector(root).collect();
    assert_eq!(relative_names(root, &files), vec!["electron/main.js", "src/index.ts"]);
  }

  #[test]
  fn test_exclusion_ignores_root_location() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("dist-checkout");
    touch(&root, "src/index.ts");

    let files = default_collector(&root).collect();
    assert_eq!(relative_names(&root, &files), vec!["src/index.ts"]);
  }

  #[test]
  fn test_directories_with_matching_extension_are_not_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("weird.js")).unwrap();
    touch(root, "weird.js/inner.ts");

    let files = default_collector(root).collect();
    assert_eq!(relative_names(root, &files), vec!["weird.js/inner.ts"]);
  }

  #[cfg(unix)]
  #[test]
  fn test_symlinks_to_files_are_collected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "src/real.ts");
    touch(root, "shared/util.ts");
    std::os::unix::fs::symlink(root.join("src/real.ts"), root.join("src/link.ts")).unwrap();
    std::os::unix::fs::symlink(root.join("missing.ts"), root.join("src/broken.ts")).unwrap();
    std::os::unix::fs::symlink(root.join("shared"), root.join("src/shared.js")).unwrap();

    let files = default_collector(root).collect();
    assert_eq!(
      relative_names(root, &files),
      vec!["shared/util.ts", "src/link.ts", "src/real.ts"]
    );
  }

  #[test]
  fn test_display_path_strips_current_dir() {
    assert_eq!(display_path(Path::new("./src/index.ts")), "src/index.ts");
    assert_eq!(display_path(Path::new("/abs/src/index.ts")), "/abs/src/index.ts");
    assert_eq!(display_path(Path::new("src/index.ts")), "src/index.ts");
  }
}
