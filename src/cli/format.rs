//! # Format Command
//!
//! The one and only command: recursively normalize header comment blocks and
//! include guards under a root path, rewriting files in place.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use clap::{Args, CommandFactory};

use crate::config::ScanConfig;
use crate::identity::OsUserIdentity;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::processor::Processor;
use crate::{info_log, verbose_log};

/// Arguments for the format command
#[derive(Args, Debug, Default)]
pub struct FormatArgs {
  /// Root directory to scan recursively. When omitted, usage is printed and
  /// nothing is processed.
  #[arg(value_name = "PATH")]
  pub root: Option<PathBuf>,

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

/// Run the format command with the given arguments
pub fn run_format(args: FormatArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set output mode for the info_log!/verbose_log! macros
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  // No root path: print usage to stdout and exit without processing
  let Some(root) = args.root else {
    let mut cmd = super::Cli::command();
    cmd.print_help().context("Failed to write usage message")?;
    return Ok(());
  };

  if !root.is_dir() {
    bail!("Not a readable directory: {}", root.display());
  }

  verbose_log!("Scanning tree rooted at: {}", root.display());

  let year = chrono::Local::now().year().to_string();
  let processor = Processor::new(ScanConfig::default(), Box::new(OsUserIdentity), year);

  let summary = processor.process(&root)?;
  info_log!(
    "Scanned {} files, rewrote {}",
    summary.files_scanned,
    summary.files_rewritten
  );

  Ok(())
}
