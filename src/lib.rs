//! # relicense
//!
//! A tool that replaces MIT license headers in JavaScript and TypeScript
//! sources with a proprietary copyright notice.
//!
//! `relicense` walks a directory tree, keeps files with the selected
//! extensions whose paths contain none of the exclusion substrings, and in
//! each file replaces the first comment block shaped like the MIT header with
//! the proprietary header. Files are modified in place.
//!
//! ## Features
//!
//! * Recursive scan with extension selection and path exclusions
//! * Cheap signature pre-filter before the structural header match
//! * Dry-run mode with diffs
//! * Configurable extensions, exclusions and header text (`.relicense.toml`)
//! * JSON report of per-file outcomes
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use relicense::processor::{Processor, ProcessorConfig};
//!
//! let processor = Processor::new(ProcessorConfig {
//!     dry_run: true,
//!     ..ProcessorConfig::new(PathBuf::from("."))
//! });
//!
//! let summary = processor.run();
//! println!("{} files would be updated", summary.updated_count());
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Traversal and per-file processing
//! * [`header`] - MIT header detection and replacement
//! * [`config`] - Configuration file support
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`header`]: crate::header
//! [`config`]: crate::config
//! [`logging`]: crate::logging

pub mod cli;
pub mod config;
pub mod diff;
pub mod file_filter;
pub mod header;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
