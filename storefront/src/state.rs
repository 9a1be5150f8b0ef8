// stylestore_app/src/state.rs

use std::sync::Arc;

use crate::api::StoreApi;
use crate::config::AppConfig;
use crate::errors::Result;
use stylestore::{CartManager, RouteGuard, SessionManager};

/// Everything the running app shares. Cloning is cheap; every clone
/// observes the same cart and session.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub api: StoreApi,
  pub cart: CartManager,
  pub session: SessionManager,
  pub guard: RouteGuard,
}

impl AppState {
  /// Wires the object graph: one HTTP client, a session manager that
  /// authenticates through it, and the route guard over that session.
  /// The cart and session start empty.
  pub fn boot(config: AppConfig) -> Result<Self> {
    let config = Arc::new(config);
    let api = StoreApi::new(&config)?;
    let session = SessionManager::new(Arc::new(api.clone()));
    let guard = RouteGuard::new(session.clone(), "/login");

    Ok(AppState {
      config,
      api,
      cart: CartManager::new(),
      session,
      guard,
    })
  }
}

impl std::fmt::Debug for AppState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppState")
      .field("config", &self.config)
      .field("cart_len", &self.cart.len())
      .field("authenticated", &self.session.is_authenticated())
      .finish()
  }
}
