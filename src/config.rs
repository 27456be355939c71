//! # Configuration Module
//!
//! This module provides configuration support for relicense, allowing users to
//! change which extensions are scanned, which paths are excluded, and which
//! header text is written.
//!
//! Configuration can be specified in a `.relicense.toml` file or via the
//! `RELICENSE_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".relicense.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "RELICENSE_CONFIG";

/// Extensions scanned when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Path substrings excluded when none are configured.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
  "node_modules",
  "dist",
  "electron/node_modules",
  "electron/release",
  "electron/app",
  ".git",
  "update_licenses.py",
  "update_licenses.sh",
];

fn default_extensions() -> Vec<String> {
  DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_exclusions() -> Vec<String> {
  DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect()
}

/// Main configuration struct for relicense.
///
/// Loaded from a `.relicense.toml` file. Every field is optional in the file;
/// missing fields fall back to the built-in defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  /// File extensions to scan, without the leading dot.
  #[serde(default = "default_extensions")]
  pub extensions: Vec<String>,

  /// Path substrings that exclude a file or directory from processing.
  /// Replaces the default list when present.
  #[serde(default = "default_exclusions")]
  pub exclude: Vec<String>,

  /// File containing the replacement header text.
  #[serde(default)]
  pub header_file: Option<PathBuf>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      extensions: default_extensions(),
      exclude: default_exclusions(),
      header_file: None,
    }
  }
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// An extension entry is invalid.
  #[error("Invalid extension '{extension}': {message}")]
  InvalidExtension { extension: String, message: String },

  /// An exclusion entry is invalid.
  #[error("Invalid exclusion: {0}")]
  InvalidExclusion(String),
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
  /// Replaces the configured extensions when non-empty.
  pub extensions: Vec<String>,
  /// Appended to the configured exclusions.
  pub exclude: Vec<String>,
  /// Replaces the configured header file.
  pub header_file: Option<PathBuf>,
}

impl Config {
  /// Load configuration from a file.
  ///
  /// A relative `header-file` is resolved against the directory holding the
  /// config file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    debug!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let mut config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    if let Some(header_file) = config.header_file.take() {
      let resolved = match path.parent() {
        Some(parent) if header_file.is_relative() => parent.join(header_file),
        _ => header_file,
      };
      config.header_file = Some(resolved);
    }

    debug!(
      "Loaded config with {} extensions and {} exclusions",
      config.extensions.len(),
      config.exclude.len()
    );

    Ok(config)
  }

  /// Parse configuration from TOML text without validating it.
  pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(content)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - At least one extension is configured
  /// - Extensions are non-empty and don't include the leading dot
  /// - Exclusion substrings are non-empty
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.extensions.is_empty() {
      return Err(ConfigError::InvalidExtension {
        extension: String::new(),
        message: "at least one extension is required".to_string(),
      });
    }

    for ext in &self.extensions {
      if ext.is_empty() {
        return Err(ConfigError::InvalidExtension {
          extension: ext.clone(),
          message: "extension cannot be empty".to_string(),
        });
      }

      if ext.starts_with('.') {
        return Err(ConfigError::InvalidExtension {
          extension: ext.clone(),
          message: "extension should not include leading dot".to_string(),
        });
      }
    }

    if self.exclude.iter().any(|e| e.is_empty()) {
      return Err(ConfigError::InvalidExclusion(
        "exclusion substring cannot be empty".to_string(),
      ));
    }

    Ok(())
  }

  /// Merge command-line overrides into this configuration and re-validate.
  pub fn merge_cli_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
    if !overrides.extensions.is_empty() {
      self.extensions = overrides.extensions;
    }
    self.exclude.extend(overrides.exclude);
    if overrides.header_file.is_some() {
      self.header_file = overrides.header_file;
    }
    self.validate()
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `RELICENSE_CONFIG` environment variable
/// 3. `.relicense.toml` in the root directory
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      info!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    info!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let root_config = root.join(DEFAULT_CONFIG_FILENAME);
  if root_config.exists() {
    info!("Using root config: {}", root_config.display());
    return Some(root_config);
  }

  debug!("No config file found");
  None
}

/// Load configuration from the discovered path, or return the defaults.
///
/// An explicit path that does not exist is an error rather than a silent
/// fallback.
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Config> {
  if no_config {
    debug!("Config file discovery disabled (--no-config)");
    return Ok(Config::default());
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display())),
    None => Ok(Config::default()),
  }
}
