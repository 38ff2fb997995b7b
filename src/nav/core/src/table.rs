/* src/nav/core/src/table.rs */

use crate::errors::NavError;
use crate::resolve::{Navigation, path_segments};
use crate::route::Route;

/// Ordered route list plus the designated fallback page id. Built once at
/// startup, immutable afterwards; no dynamic registration or removal.
#[derive(Debug, Clone)]
pub struct RouteTable {
  routes: Vec<Route>,
  fallback: String,
}

impl RouteTable {
  pub fn builder(fallback: impl Into<String>) -> RouteTableBuilder {
    RouteTableBuilder { fallback: fallback.into(), routes: Vec::new() }
  }

  pub fn routes(&self) -> &[Route] {
    &self.routes
  }

  /// Page designated when no route matches.
  pub fn fallback(&self) -> &str {
    &self.fallback
  }

  /// Resolve a path to a page. Routes are tried in declaration order and
  /// the first structural match wins. An unmatched path designates the
  /// fallback page with empty params — a normal outcome, never an error.
  ///
  /// A path that does not begin with '/' names no location and resolves
  /// to the fallback directly.
  pub fn resolve(&self, path: &str) -> Navigation {
    if !path.starts_with('/') {
      return Navigation::not_found(&self.fallback);
    }
    let segments = path_segments(path);
    self
      .routes
      .iter()
      .find_map(|route| {
        route.matches(&segments).map(|params| Navigation::matched(route.page(), params))
      })
      .unwrap_or_else(|| Navigation::not_found(&self.fallback))
  }
}

/// Accumulates `(pattern, page)` pairs; validation happens in `build` so
/// declaration stays a plain chain.
pub struct RouteTableBuilder {
  fallback: String,
  routes: Vec<(String, String)>,
}

impl RouteTableBuilder {
  pub fn route(mut self, pattern: impl Into<String>, page: impl Into<String>) -> Self {
    self.routes.push((pattern.into(), page.into()));
    self
  }

  /// Parse and validate every pattern, producing the immutable table.
  pub fn build(self) -> Result<RouteTable, NavError> {
    if self.fallback.is_empty() {
      return Err(NavError::EmptyFallback);
    }
    if self.routes.is_empty() {
      return Err(NavError::EmptyTable);
    }
    let mut routes = Vec::with_capacity(self.routes.len());
    for (pattern, page) in self.routes {
      routes.push(Route::parse(&pattern, page)?);
    }
    Ok(RouteTable { routes, fallback: self.fallback })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::resolve::Outcome;

  fn bbs_table() -> RouteTable {
    RouteTable::builder("NotFound")
      .route("/", "Test")
      .route("/modal_test", "ModalTest")
      .route("/posts", "PostsList")
      .route("/posts/:id", "PostsDetail")
      .route("/login", "Login")
      .route("/notFound", "NotFound")
      .build()
      .unwrap()
  }

  #[test]
  fn root_resolves_to_landing_page() {
    let nav = bbs_table().resolve("/");
    assert_eq!(nav.page, "Test");
    assert_eq!(nav.outcome, Outcome::Matched);
    assert!(nav.params.is_empty());
  }

  #[test]
  fn literal_route_resolves_with_empty_params() {
    let nav = bbs_table().resolve("/posts");
    assert_eq!(nav.page, "PostsList");
    assert!(nav.params.is_empty());
  }

  #[test]
  fn placeholder_route_captures_param() {
    let nav = bbs_table().resolve("/posts/42");
    assert_eq!(nav.page, "PostsDetail");
    assert_eq!(nav.params.get("id").map(String::as_str), Some("42"));
  }

  #[test]
  fn unmatched_path_designates_fallback() {
    let nav = bbs_table().resolve("/nonexistent/path");
    assert_eq!(nav.page, "NotFound");
    assert!(nav.is_not_found());
    assert!(nav.params.is_empty());
  }

  #[test]
  fn trailing_slash_resolves_like_bare_path() {
    let nav = bbs_table().resolve("/posts/");
    assert_eq!(nav.page, "PostsList");
  }

  #[test]
  fn query_suffix_is_not_interpreted() {
    let nav = bbs_table().resolve("/posts/42?tab=comments");
    assert_eq!(nav.page, "PostsDetail");
    assert_eq!(nav.params.get("id").map(String::as_str), Some("42"));
  }

  #[test]
  fn declaration_order_wins_on_overlap() {
    // Both patterns structurally match "/posts/new"; the earlier one wins.
    let table = RouteTable::builder("NotFound")
      .route("/posts/new", "PostsCompose")
      .route("/posts/:id", "PostsDetail")
      .build()
      .unwrap();
    assert_eq!(table.resolve("/posts/new").page, "PostsCompose");
    assert_eq!(table.resolve("/posts/7").page, "PostsDetail");

    let flipped = RouteTable::builder("NotFound")
      .route("/posts/:id", "PostsDetail")
      .route("/posts/new", "PostsCompose")
      .build()
      .unwrap();
    let nav = flipped.resolve("/posts/new");
    assert_eq!(nav.page, "PostsDetail");
    assert_eq!(nav.params.get("id").map(String::as_str), Some("new"));
  }

  #[test]
  fn resolve_is_idempotent() {
    let table = bbs_table();
    assert_eq!(table.resolve("/posts/42"), table.resolve("/posts/42"));
    assert_eq!(table.resolve("/missing"), table.resolve("/missing"));
  }

  #[test]
  fn path_without_leading_slash_falls_back() {
    let nav = bbs_table().resolve("posts");
    assert!(nav.is_not_found());
    assert!(bbs_table().resolve("").is_not_found());
  }

  #[test]
  fn fallback_page_can_also_be_routed() {
    let nav = bbs_table().resolve("/notFound");
    assert_eq!(nav.page, "NotFound");
    assert_eq!(nav.outcome, Outcome::Matched);
  }

  #[test]
  fn builder_rejects_empty_table() {
    assert!(matches!(RouteTable::builder("NotFound").build(), Err(NavError::EmptyTable)));
  }

  #[test]
  fn builder_rejects_empty_fallback() {
    let result = RouteTable::builder("").route("/", "Test").build();
    assert!(matches!(result, Err(NavError::EmptyFallback)));
  }

  #[test]
  fn builder_surfaces_pattern_errors() {
    let result = RouteTable::builder("NotFound").route("posts", "PostsList").build();
    assert!(matches!(result, Err(NavError::Pattern { .. })));
  }
}
