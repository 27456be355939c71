//! # relicense
//!
//! Replaces MIT license headers with a proprietary copyright notice.

use anyhow::Result;
use relicense::cli::{Cli, run_rewrite};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_rewrite(cli.args)
}
