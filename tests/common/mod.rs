#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::Result;

/// An MIT header in the shape the rewriter expects.
pub const MIT_HEADER: &str = "/**
 * Copyright (c) 2023 Philip L. Giacalone
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the \"Software\"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software.
 *
 * THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND.
 */
";

/// Returns `body` preceded by the MIT header.
pub fn mit_file(body: &str) -> String {
  format!("{}{}", MIT_HEADER, body)
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

/// Reads `root/relative` as a string.
pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  Ok(fs::read_to_string(root.join(relative))?)
}
