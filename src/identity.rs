//! # User Identity Module
//!
//! Looks up the invoking user's human-readable display name, used when a new
//! header comment block is inserted. The lookup sits behind a trait so tests
//! can substitute a fixed name instead of querying the operating system.

/// Error type for identity lookups.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
  /// The operating system did not report a usable display name.
  #[error("could not determine a display name for the current user")]
  Unavailable,
}

/// Source of the current user's display name.
pub trait UserIdentity {
  /// Returns the user's display name, e.g. "Jane Doe".
  ///
  /// # Errors
  ///
  /// Returns [`IdentityError::Unavailable`] when no usable name can be
  /// resolved. The caller treats this as fatal; a header block without an
  /// author line is never written.
  fn display_name(&self) -> Result<String, IdentityError>;
}

/// Identity backed by the operating system's account information.
///
/// Prefers the account's real name and falls back to the login name, which is
/// what `whoami::realname` already does on every supported platform.
#[derive(Debug, Default)]
pub struct OsUserIdentity;

impl UserIdentity for OsUserIdentity {
  fn display_name(&self) -> Result<String, IdentityError> {
    let name = whoami::realname();
    if name.trim().is_empty() {
      return Err(IdentityError::Unavailable);
    }
    Ok(name)
  }
}

/// Identity returning a fixed name, for tests and embedding.
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub String);

impl UserIdentity for FixedIdentity {
  fn display_name(&self) -> Result<String, IdentityError> {
    Ok(self.0.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fixed_identity_returns_name() {
    let identity = FixedIdentity("Test User".to_string());
    assert_eq!(identity.display_name().unwrap(), "Test User");
  }
}
