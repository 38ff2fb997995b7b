/* demos/spa/src/pages.rs */

use std::sync::Arc;

use placard_nav::{Page, PageFactory, PageRegistry, Params};

struct TextPage {
  body: &'static str,
}

impl Page for TextPage {
  fn render(&self) -> String {
    self.body.to_string()
  }
}

fn text_page(body: &'static str) -> PageFactory {
  Arc::new(move |_: &Params| Box::new(TextPage { body }) as Box<dyn Page>)
}

struct PostsDetail {
  id: String,
}

impl Page for PostsDetail {
  fn render(&self) -> String {
    format!("post #{} with its comment thread", self.id)
  }
}

/// The bulletin-board page set behind the shipped route manifest.
pub fn bbs_registry() -> PageRegistry {
  PageRegistry::new()
    .page("Test", text_page("landing test page"))
    .page("ModalTest", text_page("modal demo"))
    .page("PostsList", text_page("all posts, newest first"))
    .page(
      "PostsDetail",
      Arc::new(|params: &Params| {
        let id = params.get("id").cloned().unwrap_or_default();
        Box::new(PostsDetail { id }) as Box<dyn Page>
      }),
    )
    .page("Login", text_page("login form"))
    .page("UploadTest", text_page("upload demo"))
    .page("SelfReflection", text_page("self reflection"))
    .page("Puyopuyo", text_page("puyopuyo"))
    .page("BlackJack", text_page("blackjack table"))
    .page("NotFound", text_page("404 - nothing posted here"))
}
