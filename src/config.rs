//! # Scan Configuration Module
//!
//! This module defines the fixed exclusion sets that decide which files are
//! candidates for normalization: ignored folder names, ignored file names,
//! and the allowed source extensions. All matching is ASCII-case-insensitive.

use std::path::Path;

/// Folder names that are never descended into.
const IGNORED_FOLDERS: &[&str] = &[
  ".git",
  ".vs",
  "lua5.3",
  "fbx",
  "tinyxml2",
  "shaders",
  "obj",
  "properties",
];

/// File names that are never processed, regardless of extension.
const IGNORED_FILES: &[&str] = &[
  "resource.h",
  "assemblyinfo.cpp",
  "shareddefines.h",
  "ddstextureloader.h",
  "ddstextureloader.cpp",
];

/// Extensions (without the leading dot) that mark a file as source code.
const SOURCE_EXTENSIONS: &[&str] = &["cpp", "h", "cs"];

/// Substring marking generated designer files, which are never touched.
const GENERATED_MARKER: &str = ".Designer.";

/// Fixed filtering rules applied during tree traversal.
///
/// The sets are initialized once at startup and never mutated; the walker
/// holds a shared reference for the duration of the run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
  ignored_folders: &'static [&'static str],
  ignored_files: &'static [&'static str],
  source_extensions: &'static [&'static str],
  generated_marker: &'static str,
}

impl Default for ScanConfig {
  fn default() -> Self {
    Self {
      ignored_folders: IGNORED_FOLDERS,
      ignored_files: IGNORED_FILES,
      source_extensions: SOURCE_EXTENSIONS,
      generated_marker: GENERATED_MARKER,
    }
  }
}

impl ScanConfig {
  /// Returns `true` if a directory with the given base name must be skipped
  /// entirely (not descended into).
  pub fn is_ignored_folder(&self, name: &str) -> bool {
    self.ignored_folders.iter().any(|f| f.eq_ignore_ascii_case(name))
  }

  /// Returns `true` if the file at `path` passes every exclusion filter and
  /// is eligible for processing.
  ///
  /// Filters are applied in order: ignored file names, allowed extensions,
  /// generated-file marker.
  pub fn is_candidate(&self, path: &Path) -> bool {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
      return false;
    };

    if self.ignored_files.iter().any(|f| f.eq_ignore_ascii_case(file_name)) {
      return false;
    }

    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
      return false;
    };
    if !self.source_extensions.iter().any(|e| e.eq_ignore_ascii_case(extension)) {
      return false;
    }

    !path.to_string_lossy().contains(self.generated_marker)
  }

  /// Returns `true` if the file has the C/C++ header extension and is
  /// therefore subject to include-guard normalization.
  pub fn is_header_file(&self, path: &Path) -> bool {
    path
      .extension()
      .and_then(|e| e.to_str())
      .is_some_and(|e| e.eq_ignore_ascii_case("h"))
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn test_ignored_folder_case_insensitive() {
    let config = ScanConfig::default();
    assert!(config.is_ignored_folder(".git"));
    assert!(config.is_ignored_folder("Obj"));
    assert!(config.is_ignored_folder("SHADERS"));
    assert!(!config.is_ignored_folder("src"));
  }

  #[test]
  fn test_candidate_by_extension() {
    let config = ScanConfig::default();
    assert!(config.is_candidate(Path::new("src/Engine.cpp")));
    assert!(config.is_candidate(Path::new("src/Engine.H")));
    assert!(config.is_candidate(Path::new("Game/Player.cs")));
    assert!(!config.is_candidate(Path::new("notes.txt")));
    assert!(!config.is_candidate(Path::new("Makefile")));
  }

  #[test]
  fn test_ignored_file_names() {
    let config = ScanConfig::default();
    assert!(!config.is_candidate(Path::new("src/resource.h")));
    assert!(!config.is_candidate(Path::new("src/Resource.H")));
    assert!(!config.is_candidate(Path::new("AssemblyInfo.cpp")));
  }

  #[test]
  fn test_generated_marker_excluded() {
    let config = ScanConfig::default();
    let path = PathBuf::from("Forms/MainForm.Designer.cs");
    assert!(!config.is_candidate(&path));
    assert!(config.is_candidate(Path::new("Forms/MainForm.cs")));
  }

  #[test]
  fn test_header_file_detection() {
    let config = ScanConfig::default();
    assert!(config.is_header_file(Path::new("a/b.h")));
    assert!(config.is_header_file(Path::new("a/b.H")));
    assert!(!config.is_header_file(Path::new("a/b.cpp")));
    assert!(!config.is_header_file(Path::new("a/b")));
  }
}
