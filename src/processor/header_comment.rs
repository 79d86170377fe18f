//! # Header Comment Normalizer
//!
//! Ensures every source file starts with the standardized header comment
//! block. Detection is binary: a file "has a header" when the scan finds two
//! delimiter lines plus a copyright line, and in that case nothing is
//! touched. Otherwise the five-line block is inserted at the very top.

use std::path::Path;

use anyhow::{Context, Result};

use crate::identity::UserIdentity;

/// Full delimiter line framing the header block.
pub const DELIMITER_LINE: &str = "//=============================================================================";

/// Substring that identifies a delimiter line during detection.
const DELIMITER_MARKER: &str = "//==";

/// Comment token that opens every line of the block.
const COMMENT_TOKEN: &str = "//";

/// Marker text that identifies the copyright line during detection.
const RIGHTS_MARKER: &str = "All Rights Reserved";

/// Inserts the standardized header comment block where it is missing.
pub struct HeaderCommentNormalizer {
  /// Year written into the attribution line of new header blocks.
  year: String,
}

impl HeaderCommentNormalizer {
  pub const fn new(year: String) -> Self {
    Self { year }
  }

  /// Normalizes the header comment block of the file at `path`.
  ///
  /// Scans the buffer once, top to bottom, tracking three independent
  /// conditions: a first delimiter line, a later second delimiter line (not
  /// necessarily adjacent), and a comment line carrying the rights-reserved
  /// marker. As soon as all three hold the file is considered already
  /// normalized and the scan stops.
  ///
  /// Returns `true` when the five-line block was inserted, `false` when the
  /// buffer was left untouched. The user's display name is resolved only at
  /// insertion time; a failed lookup is fatal.
  pub fn normalize(&self, path: &Path, lines: &mut Vec<String>, identity: &dyn UserIdentity) -> Result<bool> {
    if self.has_header_block(lines) {
      return Ok(false);
    }

    let file_name = path
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_default();
    let author = identity
      .display_name()
      .with_context(|| format!("Cannot author header block for: {}", path.display()))?;

    lines.insert(0, DELIMITER_LINE.to_string());
    lines.insert(
      1,
      format!("{} {} by {}, {} {}.", COMMENT_TOKEN, file_name, author, self.year, RIGHTS_MARKER),
    );
    lines.insert(2, COMMENT_TOKEN.to_string());
    lines.insert(3, COMMENT_TOKEN.to_string());
    lines.insert(4, DELIMITER_LINE.to_string());

    Ok(true)
  }

  fn has_header_block(&self, lines: &[String]) -> bool {
    let mut start_line: Option<usize> = None;
    let mut end_line: Option<usize> = None;
    let mut has_copyright = false;

    for (i, line) in lines.iter().enumerate() {
      if line.contains(DELIMITER_MARKER) {
        if start_line.is_none() {
          start_line = Some(i);
        } else if end_line.is_none() {
          end_line = Some(i);
        }
      }

      if line.contains(COMMENT_TOKEN) && line.contains(RIGHTS_MARKER) {
        has_copyright = true;
      }

      if start_line.is_some() && end_line.is_some() && has_copyright {
        return true;
      }
    }

    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::identity::FixedIdentity;

  fn lines(content: &[&str]) -> Vec<String> {
    content.iter().map(|s| (*s).to_string()).collect()
  }

  fn normalizer() -> HeaderCommentNormalizer {
    HeaderCommentNormalizer::new("2026".to_string())
  }

  #[test]
  fn test_inserts_five_lines_at_top() {
    let identity = FixedIdentity("Jane Doe".to_string());
    let mut buffer = lines(&["#include \"engine.h\"", "", "int main() {}"]);

    let modified = normalizer()
      .normalize(Path::new("src/Main.cpp"), &mut buffer, &identity)
      .unwrap();

    assert!(modified);
    assert_eq!(buffer.len(), 8);
    assert_eq!(buffer[0], DELIMITER_LINE);
    assert_eq!(buffer[1], "// Main.cpp by Jane Doe, 2026 All Rights Reserved.");
    assert_eq!(buffer[2], "//");
    assert_eq!(buffer[3], "//");
    assert_eq!(buffer[4], DELIMITER_LINE);
    // Original content preserved verbatim below the block
    assert_eq!(&buffer[5..], &lines(&["#include \"engine.h\"", "", "int main() {}"])[..]);
  }

  #[test]
  fn test_existing_header_left_untouched() {
    let identity = FixedIdentity("Jane Doe".to_string());
    let mut buffer = lines(&[
      DELIMITER_LINE,
      "// Main.cpp by John Smith, 2019 All Rights Reserved.",
      "//",
      "//",
      DELIMITER_LINE,
      "int main() {}",
    ]);
    let before = buffer.clone();

    let modified = normalizer()
      .normalize(Path::new("Main.cpp"), &mut buffer, &identity)
      .unwrap();

    assert!(!modified);
    assert_eq!(buffer, before);
  }

  #[test]
  fn test_delimiters_without_copyright_is_absent() {
    let identity = FixedIdentity("Jane Doe".to_string());
    let mut buffer = lines(&[DELIMITER_LINE, "// just a banner", DELIMITER_LINE, "int x;"]);

    let modified = normalizer()
      .normalize(Path::new("x.cpp"), &mut buffer, &identity)
      .unwrap();

    assert!(modified);
    assert_eq!(buffer.len(), 9);
  }

  #[test]
  fn test_copyright_without_delimiters_is_absent() {
    let identity = FixedIdentity("Jane Doe".to_string());
    let mut buffer = lines(&["// Old file, 2003 All Rights Reserved.", "int x;"]);

    let modified = normalizer()
      .normalize(Path::new("x.cpp"), &mut buffer, &identity)
      .unwrap();

    assert!(modified);
  }

  #[test]
  fn test_detection_accepts_non_adjacent_delimiters() {
    let identity = FixedIdentity("Jane Doe".to_string());
    let mut buffer = lines(&[
      DELIMITER_LINE,
      "// banner",
      "// stuff in between",
      "// Engine.h by Someone, 2020 All Rights Reserved.",
      DELIMITER_LINE,
    ]);
    let before = buffer.clone();

    let modified = normalizer()
      .normalize(Path::new("Engine.h"), &mut buffer, &identity)
      .unwrap();

    assert!(!modified);
    assert_eq!(buffer, before);
  }

  #[test]
  fn test_empty_file_gets_header() {
    let identity = FixedIdentity("Jane Doe".to_string());
    let mut buffer: Vec<String> = Vec::new();

    let modified = normalizer()
      .normalize(Path::new("New.cs"), &mut buffer, &identity)
      .unwrap();

    assert!(modified);
    assert_eq!(buffer.len(), 5);
    assert_eq!(buffer[1], "// New.cs by Jane Doe, 2026 All Rights Reserved.");
  }
}
