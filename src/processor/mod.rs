//! # Processor Module
//!
//! This module contains the core pipeline for normalizing source files:
//! walking the tree, loading each candidate into a line buffer, running the
//! two normalizers, and saving the buffer back only when something changed.
//!
//! The module is organized into several submodules:
//! - [`walker`] - Recursive directory traversal with exclusion filters
//! - [`file_io`] - Line buffer loading and saving
//! - [`header_comment`] - Standardized header comment block insertion
//! - [`header_guard`] - Legacy include guard to `#pragma once` rewriting
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules sequentially: one file is fully loaded, transformed, and saved
//! before the next is visited.

mod file_io;
mod header_comment;
mod header_guard;
mod walker;

use std::path::Path;

use anyhow::Result;
pub use file_io::FileIO;
pub use header_comment::{DELIMITER_LINE, HeaderCommentNormalizer};
pub use header_guard::{HeaderGuardNormalizer, PRAGMA_ONCE};
use tracing::{debug, error};
pub use walker::FileWalker;

use crate::config::ScanConfig;
use crate::identity::UserIdentity;
use crate::info_log;

/// Counters reported after a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
  /// Candidate files visited.
  pub files_scanned: usize,
  /// Files rewritten because a normalizer changed them.
  pub files_rewritten: usize,
}

/// Processor for normalizing header comments and include guards.
///
/// The `Processor` is responsible for:
/// - Scanning the tree recursively with the fixed exclusion filters
/// - Inserting the standardized header comment block where it is missing
/// - Rewriting legacy include guards in `.h` files to `#pragma once`
/// - Saving only files that actually changed
pub struct Processor {
  /// Fixed exclusion sets for the walker.
  scan_config: ScanConfig,

  /// Inserts missing header comment blocks.
  comment_normalizer: HeaderCommentNormalizer,

  /// Rewrites legacy include guards.
  guard_normalizer: HeaderGuardNormalizer,

  /// Source of the current user's display name for new header blocks.
  identity: Box<dyn UserIdentity>,
}

impl Processor {
  /// Creates a new processor.
  ///
  /// # Parameters
  ///
  /// * `scan_config` - The exclusion sets applied during traversal
  /// * `identity` - Display name source used when inserting header blocks
  /// * `year` - Year written into new header blocks
  pub fn new(scan_config: ScanConfig, identity: Box<dyn UserIdentity>, year: String) -> Self {
    Self {
      scan_config,
      comment_normalizer: HeaderCommentNormalizer::new(year),
      guard_normalizer: HeaderGuardNormalizer,
      identity,
    }
  }

  /// Processes every candidate file under `root`.
  ///
  /// Files are handled strictly sequentially in deterministic walk order.
  /// Each path is echoed before processing begins. The run aborts on the
  /// first filesystem or identity error; there is no retry and no
  /// skip-and-continue.
  ///
  /// # Errors
  ///
  /// Returns an error if traversal fails, a file cannot be read or written,
  /// or the user's display name cannot be resolved when a header block has
  /// to be inserted.
  pub fn process(&self, root: &Path) -> Result<RunSummary> {
    let files = FileWalker::new(&self.scan_config).walk(root)?;

    let mut summary = RunSummary::default();
    for path in files {
      info_log!("{}", path.display());
      summary.files_scanned += 1;

      match self.process_file(&path) {
        Ok(true) => summary.files_rewritten += 1,
        Ok(false) => {}
        Err(e) => {
          error!("Failed to process {}: {:#}", path.display(), e);
          return Err(e);
        }
      }
    }

    Ok(summary)
  }

  /// Processes a single file, returning whether it was rewritten.
  ///
  /// The comment normalizer always runs first; guard line indices are only
  /// valid on the post-insertion buffer.
  pub fn process_file(&self, path: &Path) -> Result<bool> {
    let mut lines = FileIO::read_lines(path)?;

    let mut modified = self
      .comment_normalizer
      .normalize(path, &mut lines, self.identity.as_ref())?;

    if self.scan_config.is_header_file(path) {
      modified |= self.guard_normalizer.normalize(&mut lines);
    }

    if modified {
      FileIO::write_lines(path, &lines)?;
      debug!("Rewrote: {}", path.display());
    }

    Ok(modified)
  }
}
