//! # headerfmt
//!
//! A tool that normalizes header comment blocks and include guards in
//! C/C++/C# source trees.

mod cli;
mod config;
mod identity;
mod logging;
mod processor;

use anyhow::Result;

use crate::cli::{Cli, run_format};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run_format(cli.format_args)
}
