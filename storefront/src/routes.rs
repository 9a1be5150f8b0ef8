// stylestore_app/src/routes.rs

//! The navigable surface of the storefront, as data.
//!
//! Paths round-trip through [`Route::parse`] and [`Route::path`], and the
//! admin dashboard resolves through the session guard so an anonymous
//! visitor is redirected before any protected screen is produced.

use stylestore::RouteGuard;

/// Sections of the admin dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
  Overview,
  Products,
  Posts,
  Comments,
  Users,
  Settings,
}

impl Panel {
  /// Path segment under `/dashboard`; the overview is the bare path.
  fn segment(&self) -> Option<&'static str> {
    match self {
      Panel::Overview => None,
      Panel::Products => Some("products"),
      Panel::Posts => Some("posts"),
      Panel::Comments => Some("comments"),
      Panel::Users => Some("users"),
      Panel::Settings => Some("settings"),
    }
  }

  fn from_segment(segment: &str) -> Option<Panel> {
    match segment {
      "products" => Some(Panel::Products),
      "posts" => Some(Panel::Posts),
      "comments" => Some(Panel::Comments),
      "users" => Some(Panel::Users),
      "settings" => Some(Panel::Settings),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
  Home,
  Products,
  ProductDetails(u64),
  Cart,
  Login,
  Checkout,
  Payment,
  Dashboard(Panel),
  NotFound,
}

impl Route {
  /// Maps a path to a route. Anything unrecognized, including a
  /// non-numeric product id or an unknown dashboard section, is
  /// [`Route::NotFound`].
  pub fn parse(path: &str) -> Route {
    let trimmed = path.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
    let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
    match segments.as_slice() {
      [""] => Route::Home,
      ["products"] => Route::Products,
      ["products", id] => match id.parse::<u64>() {
        Ok(id) => Route::ProductDetails(id),
        Err(_) => Route::NotFound,
      },
      ["cart"] => Route::Cart,
      ["login"] => Route::Login,
      ["checkout"] => Route::Checkout,
      ["payment"] => Route::Payment,
      ["dashboard"] => Route::Dashboard(Panel::Overview),
      ["dashboard", section] => match Panel::from_segment(section) {
        Some(panel) => Route::Dashboard(panel),
        None => Route::NotFound,
      },
      _ => Route::NotFound,
    }
  }

  pub fn path(&self) -> String {
    match self {
      Route::Home => "/".to_string(),
      Route::Products => "/products".to_string(),
      Route::ProductDetails(id) => format!("/products/{id}"),
      Route::Cart => "/cart".to_string(),
      Route::Login => "/login".to_string(),
      Route::Checkout => "/checkout".to_string(),
      Route::Payment => "/payment".to_string(),
      Route::Dashboard(panel) => match panel.segment() {
        Some(segment) => format!("/dashboard/{segment}"),
        None => "/dashboard".to_string(),
      },
      Route::NotFound => "/404".to_string(),
    }
  }

  /// Whether the route sits behind the session guard.
  pub fn is_protected(&self) -> bool {
    matches!(self, Route::Dashboard(_))
  }
}

/// Outcome of routing a path through the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
  Render(Route),
  Redirect(Route),
}

/// Routes `path`, bouncing protected routes to the guard's redirect
/// target when nobody is signed in. The protected branch is only built
/// for an authenticated session.
pub fn resolve(path: &str, guard: &RouteGuard) -> Resolution {
  let route = Route::parse(path);
  if !route.is_protected() {
    return Resolution::Render(route);
  }
  guard.resolve(
    || Resolution::Render(route),
    || Resolution::Redirect(Route::parse(guard.redirect_target())),
  )
}
