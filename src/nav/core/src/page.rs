/* src/nav/core/src/page.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::resolve::{Navigation, Params};

/// A renderable page instance. Construction and rendering belong to the
/// page side; the navigation core refers to pages by id only.
pub trait Page {
  fn render(&self) -> String;
}

/// Given the captured route params, produce a renderable page.
pub type PageFactory = Arc<dyn Fn(&Params) -> Box<dyn Page> + Send + Sync>;

/// Page-id -> factory registry. Keeps the resolver free of compile-time
/// coupling to page implementations: the table knows ids, the registry
/// knows how to build.
#[derive(Clone, Default)]
pub struct PageRegistry {
  factories: BTreeMap<String, PageFactory>,
}

impl PageRegistry {
  pub fn new() -> Self {
    Self { factories: BTreeMap::new() }
  }

  pub fn page(mut self, id: impl Into<String>, factory: PageFactory) -> Self {
    self.factories.insert(id.into(), factory);
    self
  }

  pub fn contains(&self, id: &str) -> bool {
    self.factories.contains_key(id)
  }

  /// Instantiate the page a navigation resolved to. None when the id was
  /// never registered; the surface decides how to present that.
  pub fn instantiate(&self, nav: &Navigation) -> Option<Box<dyn Page>> {
    self.factories.get(&nav.page).map(|factory| factory(&nav.params))
  }
}

/// Page-rendering collaborator contract. The surface owns the "currently
/// active page" state and the viewport; the navigator drives it after
/// every resolution.
pub trait Surface {
  /// Instantiate and display the page a navigation resolved to.
  fn show(&mut self, nav: &Navigation);
  /// Reset the viewport scroll offset.
  fn reset_scroll(&mut self, x: i32, y: i32);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::resolve::Params;

  struct Detail {
    id: String,
  }

  impl Page for Detail {
    fn render(&self) -> String {
      format!("post #{}", self.id)
    }
  }

  fn detail_factory() -> PageFactory {
    Arc::new(|params: &Params| {
      let id = params.get("id").cloned().unwrap_or_default();
      Box::new(Detail { id }) as Box<dyn Page>
    })
  }

  #[test]
  fn factory_receives_captured_params() {
    let registry = PageRegistry::new().page("PostsDetail", detail_factory());
    let mut params = Params::new();
    params.insert("id".to_string(), "42".to_string());
    let nav = Navigation::matched("PostsDetail", params);
    let page = registry.instantiate(&nav).unwrap();
    assert_eq!(page.render(), "post #42");
  }

  #[test]
  fn unregistered_page_is_observable_not_a_panic() {
    let registry = PageRegistry::new().page("PostsDetail", detail_factory());
    let nav = Navigation::matched("Login", Params::new());
    assert!(registry.instantiate(&nav).is_none());
    assert!(!registry.contains("Login"));
  }
}
