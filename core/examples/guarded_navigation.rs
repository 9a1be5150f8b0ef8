// stylestore/examples/guarded_navigation.rs

use async_trait::async_trait;
use std::sync::Arc;
use stylestore::{
  AuthGateway, Credentials, GuardState, Identity, RouteGuard, SessionManager, StoreError, StoreResult,
};
use tracing::info;

// 1. An in-memory gateway: accepts one known user. A real application
//    implements AuthGateway over its HTTP client instead.
struct DemoGateway;

#[async_trait]
impl AuthGateway for DemoGateway {
  async fn authenticate(&self, credentials: &Credentials) -> StoreResult<Identity> {
    if credentials.username == "emilys" && credentials.password == "emilyspass" {
      Ok(Identity {
        id: 1,
        username: credentials.username.clone(),
        email: "emily.johnson@x.dummyjson.com".to_string(),
        first_name: "Emily".to_string(),
        last_name: "Johnson".to_string(),
        token: "demo-token".to_string(),
      })
    } else {
      Err(StoreError::InvalidCredentials {
        reason: "unknown user".to_string(),
      })
    }
  }
}

fn render_dashboard() -> String {
  "<Dashboard />".to_string()
}

fn render_login() -> String {
  "<Login />".to_string()
}

#[tokio::main]
async fn main() -> Result<(), StoreError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Guarded Navigation Example ---");

  // 2. Boot: one session manager, one guard in front of /dashboard.
  let session = SessionManager::new(Arc::new(DemoGateway));
  let guard = RouteGuard::new(session.clone(), "/login");

  // 3. Visiting the dashboard while signed out falls back to the login view;
  //    the dashboard closure is never invoked.
  assert_eq!(guard.state(), GuardState::Unauthenticated);
  let view = guard.resolve(render_dashboard, render_login);
  info!(%view, redirect = guard.redirect_target(), "anonymous visit");

  // 4. A failed login changes nothing.
  if let Err(err) = session.login(Credentials::new("emilys", "wrong")).await {
    info!(%err, "login rejected, still signed out");
  }

  // 5. After a successful login the same navigation renders the dashboard.
  let identity = session.login(Credentials::new("emilys", "emilyspass")).await?;
  info!(user = %identity.full_name(), "signed in");
  let view = guard.resolve(render_dashboard, render_login);
  info!(%view, "authenticated visit");

  // 6. Logout takes effect on the very next resolution.
  session.logout();
  let view = guard.resolve(render_dashboard, render_login);
  info!(%view, "after logout");

  Ok(())
}
