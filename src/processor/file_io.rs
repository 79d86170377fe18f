//! # File I/O Module
//!
//! Loads a source file into an ordered line buffer and writes the buffer back
//! when a normalizer changed it. Files that need no changes are never
//! rewritten, so their content and modification time stay untouched.

use std::path::Path;

use anyhow::{Context, Result};

/// Line terminator appended to every line on save.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing line buffers.
pub struct FileIO;

impl FileIO {
  /// Reads a file into an ordered sequence of lines.
  ///
  /// Line terminators are stripped; both LF and CRLF endings are accepted
  /// transparently. Empty lines are preserved.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be opened or is not valid UTF-8.
  pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content =
      std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(content.lines().map(str::to_owned).collect())
  }

  /// Writes the line buffer back to `path`, truncating prior contents.
  ///
  /// Each line is followed by the platform line terminator.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be written.
  pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + LINE_TERMINATOR.len()).sum());
    for line in lines {
      content.push_str(line);
      content.push_str(LINE_TERMINATOR);
    }

    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_read_lines_strips_lf_and_crlf() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("mixed.cpp");
    std::fs::write(&path, "first\r\nsecond\n\nfourth")?;

    let lines = FileIO::read_lines(&path)?;
    assert_eq!(lines, vec!["first", "second", "", "fourth"]);
    Ok(())
  }

  #[test]
  fn test_write_lines_appends_terminator() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("out.cpp");

    FileIO::write_lines(&path, &["a".to_string(), String::new(), "b".to_string()])?;
    let written = std::fs::read_to_string(&path)?;
    assert_eq!(
      written,
      format!("a{t}{t}b{t}", t = LINE_TERMINATOR)
    );
    Ok(())
  }

  #[test]
  fn test_round_trip_preserves_line_order() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("round.cpp");
    std::fs::write(&path, "one\ntwo\nthree\n")?;

    let lines = FileIO::read_lines(&path)?;
    FileIO::write_lines(&path, &lines)?;
    assert_eq!(FileIO::read_lines(&path)?, lines);
    Ok(())
  }

  #[test]
  fn test_read_missing_file_is_error() {
    let result = FileIO::read_lines(Path::new("/nonexistent/definitely-missing.cpp"));
    assert!(result.is_err());
  }
}
