/* src/nav/core/src/errors.rs */

use std::fmt;
use std::path::PathBuf;

/// Errors raised while building a route table or loading a manifest.
/// Resolution itself cannot fail: an unmatched path is normalized into the
/// fallback navigation, never an error.
#[derive(Debug)]
pub enum NavError {
  /// The route table has no routes.
  EmptyTable,
  /// The fallback page id is empty.
  EmptyFallback,
  /// A route pattern failed to parse.
  Pattern { pattern: String, reason: String },
  /// The route manifest file could not be read.
  Io { path: PathBuf, source: std::io::Error },
  /// The route manifest is not valid JSON.
  Json { source: serde_json::Error },
}

impl NavError {
  pub(crate) fn pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::Pattern { pattern: pattern.into(), reason: reason.into() }
  }
}

impl fmt::Display for NavError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::EmptyTable => write!(f, "route table has no routes"),
      Self::EmptyFallback => write!(f, "fallback page id is empty"),
      Self::Pattern { pattern, reason } => write!(f, "route pattern \"{pattern}\": {reason}"),
      Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
      Self::Json { source } => write!(f, "invalid route manifest: {source}"),
    }
  }
}

impl std::error::Error for NavError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Json { source } => Some(source),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pattern_display_names_the_pattern() {
    let err = NavError::pattern("/posts/:", "empty placeholder");
    assert_eq!(err.to_string(), "route pattern \"/posts/:\": empty placeholder");
  }

  #[test]
  fn empty_table_display() {
    assert_eq!(NavError::EmptyTable.to_string(), "route table has no routes");
  }

  #[test]
  fn io_error_keeps_source() {
    use std::error::Error;

    let err = NavError::Io {
      path: PathBuf::from("routes.json"),
      source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.source().is_some());
    assert!(err.to_string().contains("routes.json"));
  }
}
