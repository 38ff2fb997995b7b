/* src/nav/core/src/route.rs */

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::NavError;
use crate::resolve::Params;

/// One element of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  /// Matches a path segment by exact equality.
  Literal(String),
  /// `:name` placeholder: matches any single non-empty path segment and
  /// binds its text under `name`.
  Param(String),
}

fn placeholder_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap())
}

/// Parse a `/`-delimited pattern like `/posts/:id` into segments.
/// `/` parses to an empty segment list.
pub fn parse_pattern(pattern: &str) -> Result<Vec<Segment>, NavError> {
  let Some(rest) = pattern.strip_prefix('/') else {
    return Err(NavError::pattern(pattern, "must start with '/'"));
  };

  let mut segments = Vec::new();
  let mut seen = HashSet::new();
  for raw in rest.split('/').filter(|s| !s.is_empty()) {
    if let Some(name) = raw.strip_prefix(':') {
      if !placeholder_re().is_match(name) {
        return Err(NavError::pattern(pattern, format!("invalid placeholder name \":{name}\"")));
      }
      if !seen.insert(name.to_string()) {
        return Err(NavError::pattern(pattern, format!("duplicate placeholder \":{name}\"")));
      }
      segments.push(Segment::Param(name.to_string()));
    } else {
      segments.push(Segment::Literal(raw.to_string()));
    }
  }
  Ok(segments)
}

/// A navigable location: a parsed pattern plus the page id it resolves to.
/// The page id is an opaque reference; pages are constructed and owned by
/// the rendering side, never by the table.
#[derive(Debug, Clone)]
pub struct Route {
  segments: Vec<Segment>,
  pattern: String,
  page: String,
}

impl Route {
  pub fn parse(pattern: &str, page: impl Into<String>) -> Result<Self, NavError> {
    let segments = parse_pattern(pattern)?;
    Ok(Self { segments, pattern: pattern.to_string(), page: page.into() })
  }

  /// Pattern in source form, e.g. `/posts/:id`.
  pub fn pattern(&self) -> &str {
    &self.pattern
  }

  pub fn page(&self) -> &str {
    &self.page
  }

  pub fn segments(&self) -> &[Segment] {
    &self.segments
  }

  /// Match against already-split path segments, capturing placeholder
  /// values in pattern order. Segment counts must be equal; literals
  /// compare exactly.
  pub(crate) fn matches(&self, path_segments: &[&str]) -> Option<Params> {
    if path_segments.len() != self.segments.len() {
      return None;
    }
    let mut params = Params::new();
    for (segment, part) in self.segments.iter().zip(path_segments.iter().copied()) {
      match segment {
        Segment::Literal(lit) => {
          if lit != part {
            return None;
          }
        }
        Segment::Param(name) => {
          params.insert(name.clone(), part.to_string());
        }
      }
    }
    Some(params)
  }
}
