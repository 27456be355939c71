//! # Rewrite Command
//!
//! Replaces MIT headers under a root directory. This is the only command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info, trace};

use crate::config::{CliOverrides, load_config};
use crate::diff::DiffManager;
use crate::header::HeaderRewriter;
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_blank_line, print_summary};
use crate::processor::{Processor, ProcessorConfig};
use crate::report::write_json_report;

/// Arguments for the rewrite command
#[derive(Args, Debug)]
pub struct RewriteArgs {
  /// Directory to scan recursively
  #[arg(default_value = ".", value_name = "ROOT")]
  pub root: PathBuf,

  /// Path to config file (default: .relicense.toml in ROOT)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Report files that would be updated without modifying them
  #[arg(long)]
  pub dry_run: bool,

  /// Print a diff of each header replacement to stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Save diffs of header replacements to a file
  #[arg(long, value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Only process files with these extensions (repeatable, replaces the
  /// configured list)
  #[arg(long, value_name = "EXT")]
  pub ext: Vec<String>,

  /// Skip paths containing this substring (repeatable, added to the
  /// configured list)
  #[arg(long, value_name = "SUBSTR")]
  pub exclude: Vec<String>,

  /// File containing the replacement header
  #[arg(long, value_name = "FILE")]
  pub header_file: Option<PathBuf>,

  /// Write a JSON report of every processed file
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the rewrite command with the given arguments.
///
/// Per-file failures are reported and do not affect the result; only
/// start-up problems (bad root, bad config, unreadable header file) do.
pub fn run_rewrite(args: RewriteArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  if !args.root.is_dir() {
    anyhow::bail!("Root is not a directory: {}", args.root.display());
  }

  let mut config = load_config(args.config.as_deref(), &args.root, args.no_config)?;
  config
    .merge_cli_overrides(CliOverrides {
      extensions: args.ext,
      exclude: args.exclude,
      header_file: args.header_file,
    })
    .context("Invalid command-line options")?;
  debug!("Extensions: {:?}", config.extensions);
  debug!("Exclusions: {:?}", config.exclude);

  let rewriter = match config.header_file.take() {
    Some(path) => {
      let header = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read header file {}", path.display()))?;
      info!("Using replacement header from {}", path.display());
      HeaderRewriter::with_replacement(&header)
    }
    None => HeaderRewriter::new(),
  };
  trace!("Replacement header:\n{}", rewriter.replacement());

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  diff_manager.init()?;

  let processor = Processor::new(ProcessorConfig {
    dry_run: args.dry_run,
    diff_manager: Some(diff_manager),
    ..ProcessorConfig::from_config(args.root, config, rewriter)
  });

  info!("Scanning {}", processor.root().display());
  let summary = processor.run();

  print_blank_line();
  print_summary(&summary);

  if let Some(ref output_path) = args.report_json {
    match write_json_report(&summary, output_path) {
      Ok(()) => info_log!("Generated JSON report at {}", output_path.display()),
      Err(e) => eprintln!("Error generating JSON report: {:#}", e),
    }
  }

  Ok(())
}
