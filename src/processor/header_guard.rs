//! # Header Guard Normalizer
//!
//! Rewrites classic `#ifndef`/`#define`/`#endif` include guards in `.h` files
//! into a single `#pragma once` line. A file that already carries
//! `#pragma once` is left alone, as is any file where the legacy triplet is
//! incomplete.

/// The modern single-line guard directive.
pub const PRAGMA_ONCE: &str = "#pragma once";

const IFNDEF_KEYWORD: &str = "#ifndef";
const DEFINE_KEYWORD: &str = "#define";
const ENDIF_KEYWORD: &str = "#endif";

/// Converts legacy include guards to `#pragma once`.
pub struct HeaderGuardNormalizer;

impl HeaderGuardNormalizer {
  /// Normalizes the include guard in the line buffer.
  ///
  /// A single top-to-bottom scan records the guard triplet:
  /// - the opener: first `#ifndef` line containing an underscore that splits
  ///   on spaces/tabs into exactly two tokens, the second being the guard
  ///   token;
  /// - the definer: first later line containing `#define` and the exact guard
  ///   token;
  /// - the ender: first line after the definer containing `#endif`.
  ///
  /// Encountering `#pragma once` anywhere stops the scan immediately with no
  /// modification. When the full triplet is found, the ender and definer are
  /// removed (in that order, so the earlier indices stay valid) and the
  /// opener is replaced with `#pragma once`. An incomplete triplet leaves the
  /// buffer untouched.
  ///
  /// Returns `true` when the buffer was modified.
  pub fn normalize(&self, lines: &mut Vec<String>) -> bool {
    let mut ifndef_line: Option<usize> = None;
    let mut define_line: Option<usize> = None;
    let mut endif_line: Option<usize> = None;
    let mut guard_token = String::new();

    for (i, line) in lines.iter().enumerate() {
      if line.contains(PRAGMA_ONCE) {
        return false;
      }

      if ifndef_line.is_none() && line.contains(IFNDEF_KEYWORD) && line.contains('_') {
        let tokens: Vec<&str> = line.split([' ', '\t']).collect();
        if tokens.len() == 2 {
          guard_token = tokens[1].to_string();
          ifndef_line = Some(i);
        }
        continue;
      }

      if ifndef_line.is_some() && define_line.is_none() {
        if line.contains(DEFINE_KEYWORD) && line.contains(&guard_token) {
          define_line = Some(i);
        }
        continue;
      }

      if define_line.is_some() && endif_line.is_none() && line.contains(ENDIF_KEYWORD) {
        endif_line = Some(i);
      }
    }

    let (Some(ifndef), Some(define), Some(endif)) = (ifndef_line, define_line, endif_line) else {
      return false;
    };

    // Remove from back to front so the earlier indices stay valid.
    lines.remove(endif);
    lines.remove(define);
    lines[ifndef] = PRAGMA_ONCE.to_string();

    true
  }
}
