/* src/nav/core/src/manifest.rs */

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::NavError;
use crate::table::RouteTable;

/// On-disk form of the route table. The recognized patterns are
/// deployment-supplied data, not compiled-in logic, so shells can ship a
/// different page set without rebuilding the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteManifest {
  /// Page designated when no route matches.
  pub fallback: String,
  pub routes: Vec<RouteDef>,
}

/// One manifest entry: pattern in source form plus the page it resolves to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDef {
  pub path: String,
  pub page: String,
}

impl RouteManifest {
  /// Build the validated, immutable table this manifest describes.
  /// Declaration order in `routes` is match order.
  pub fn into_table(self) -> Result<RouteTable, NavError> {
    let mut builder = RouteTable::builder(self.fallback);
    for route in self.routes {
      builder = builder.route(route.path, route.page);
    }
    builder.build()
  }
}

/// Parse manifest JSON into a validated route table.
pub fn parse_route_manifest(content: &str) -> Result<RouteTable, NavError> {
  let manifest: RouteManifest =
    serde_json::from_str(content).map_err(|source| NavError::Json { source })?;
  manifest.into_table()
}

/// Read and parse a route manifest file.
pub fn load_route_manifest(path: &Path) -> Result<RouteTable, NavError> {
  let content = std::fs::read_to_string(path)
    .map_err(|source| NavError::Io { path: path.to_path_buf(), source })?;
  parse_route_manifest(&content)
}
