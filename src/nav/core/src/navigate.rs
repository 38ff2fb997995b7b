/* src/nav/core/src/navigate.rs */

use crate::page::Surface;
use crate::resolve::Navigation;
use crate::table::RouteTable;

/// Navigation context: owns the immutable route table and drives a
/// rendering surface. Explicitly constructed and passed where needed;
/// nothing here is process-global, so instances coexist freely in tests.
#[derive(Debug, Clone)]
pub struct Navigator {
  table: RouteTable,
}

impl Navigator {
  pub fn new(table: RouteTable) -> Self {
    Self { table }
  }

  pub fn table(&self) -> &RouteTable {
    &self.table
  }

  /// Resolve `path`, show the result on `surface`, then reset the
  /// viewport scroll to the origin. The reset is unconditional and fires
  /// exactly once per navigation — also when only the captured params
  /// changed, and also for the fallback page.
  pub fn navigate(&self, path: &str, surface: &mut dyn Surface) -> Navigation {
    let nav = self.table.resolve(path);
    surface.show(&nav);
    surface.reset_scroll(0, 0);
    nav
  }
}
