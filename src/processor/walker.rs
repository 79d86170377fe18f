//! # Tree Walker Module
//!
//! Recursive directory traversal producing the ordered list of candidate
//! files. Traversal is depth-first with the files of a directory collected
//! before any of its subdirectories are descended into, and entries sorted by
//! name so the processing order is deterministic.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::config::ScanConfig;

/// Recursive walker over a source tree.
///
/// Directories whose base name matches the ignored-folder set are skipped
/// entirely. Each directory is visited exactly once. An unreadable directory
/// aborts the whole walk; there is no partial-failure recovery.
pub struct FileWalker<'a> {
  config: &'a ScanConfig,
}

impl<'a> FileWalker<'a> {
  pub const fn new(config: &'a ScanConfig) -> Self {
    Self { config }
  }

  /// Walks the tree rooted at `root` and returns every candidate file in
  /// deterministic depth-first order.
  ///
  /// # Errors
  ///
  /// Returns an error if `root` or any non-ignored subdirectory cannot be
  /// read.
  pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory tree: {}", root.display());
    let mut files = Vec::new();
    self.visit(root, &mut files)?;
    debug!("Found {} candidate files", files.len());
    Ok(files)
  }

  fn visit(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    let mut entries: Vec<_> = entries
      .collect::<std::io::Result<_>>()
      .with_context(|| format!("Failed to read directory entry in: {}", dir.display()))?;
    entries.sort_by_key(|e| e.file_name());

    let mut subdirs = Vec::new();
    for entry in entries {
      let file_type = entry
        .file_type()
        .with_context(|| format!("Failed to stat: {}", entry.path().display()))?;
      let path = entry.path();

      if file_type.is_dir() {
        let name = entry.file_name();
        if self.config.is_ignored_folder(&name.to_string_lossy()) {
          trace!("Skipping ignored folder: {}", path.display());
          continue;
        }
        subdirs.push(path);
      } else if file_type.is_file() && self.config.is_candidate(&path) {
        files.push(path);
      }
    }

    // Files of the current directory come before anything in its subtrees.
    for subdir in subdirs {
      self.visit(&subdir, files)?;
    }

    Ok(())
  }
}
