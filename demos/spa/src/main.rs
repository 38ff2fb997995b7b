/* demos/spa/src/main.rs */

mod pages;
mod ui;

use std::env;

use anyhow::{Context, Result};
use placard_nav::{Navigation, Navigator, PageRegistry, Surface, parse_route_manifest};

use pages::bbs_registry;
use ui::{CYAN, DIM, RESET, YELLOW};

const ROUTES_JSON: &str = include_str!("../routes.json");

const DEFAULT_WALK: &[&str] =
  &["/", "/posts", "/posts/1", "/posts/2", "/login", "/blackjack", "/posts/", "/no/such/page"];

/// Terminal stand-in for the browser shell: renders pages as text and
/// tracks the active page plus the viewport scroll offset.
struct TerminalSurface {
  registry: PageRegistry,
  active: Option<String>,
  rendered: Option<String>,
  scroll: (i32, i32),
}

impl TerminalSurface {
  fn new(registry: PageRegistry) -> Self {
    Self { registry, active: None, rendered: None, scroll: (0, 0) }
  }
}

impl Surface for TerminalSurface {
  fn show(&mut self, nav: &Navigation) {
    self.rendered = Some(match self.registry.instantiate(nav) {
      Some(page) => page.render(),
      None => format!("page \"{}\" is not registered", nav.page),
    });
    self.active = Some(nav.page.clone());
    // Pretend the user had scrolled before leaving; navigate() resets it.
    self.scroll = (0, 240);
  }

  fn reset_scroll(&mut self, x: i32, y: i32) {
    self.scroll = (x, y);
  }
}

fn main() -> Result<()> {
  let table = parse_route_manifest(ROUTES_JSON).context("embedded routes.json is invalid")?;
  let navigator = Navigator::new(table);
  let mut surface = TerminalSurface::new(bbs_registry());

  ui::banner();

  let args: Vec<String> = env::args().skip(1).collect();
  let walk: Vec<&str> = if args.is_empty() {
    DEFAULT_WALK.to_vec()
  } else {
    args.iter().map(String::as_str).collect()
  };

  for path in walk {
    let nav = navigator.navigate(path, &mut surface);
    let marker =
      if nav.is_not_found() { format!(" {YELLOW}(fallback){RESET}") } else { String::new() };
    ui::arrow(&format!("{CYAN}{path}{RESET} \u{2192} {}{marker}", nav.page));
    if let Some(ref body) = surface.rendered {
      ui::detail(body);
    }
    let (x, y) = surface.scroll;
    ui::detail(&format!("{DIM}scroll reset to ({x}, {y}){RESET}"));
  }

  ui::blank();
  if let Some(ref active) = surface.active {
    ui::detail(&format!("{DIM}active page: {active}{RESET}"));
  }
  ui::blank();
  Ok(())
}
