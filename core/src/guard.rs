// stylestore/src/guard.rs

//! Route guarding for protected areas such as an admin dashboard.
//!
//! The guard owns no state of its own: every check reads the session
//! manager at the moment of resolution, so a logout is reflected by the
//! very next navigation.

use crate::session::SessionManager;

/// What the guard saw when it was consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
  /// A user is signed in; protected content may be produced.
  Authenticated,
  /// Nobody is signed in; navigation must fall back to the redirect target.
  Unauthenticated,
}

/// Decides, per navigation, whether protected content may render.
#[derive(Debug, Clone)]
pub struct RouteGuard {
  session: SessionManager,
  redirect_target: String,
}

impl RouteGuard {
  /// `redirect_target` is the path (typically the login page) that
  /// unauthenticated navigations are sent to.
  pub fn new(session: SessionManager, redirect_target: impl Into<String>) -> Self {
    RouteGuard {
      session,
      redirect_target: redirect_target.into(),
    }
  }

  pub fn state(&self) -> GuardState {
    if self.session.is_authenticated() {
      GuardState::Authenticated
    } else {
      GuardState::Unauthenticated
    }
  }

  /// Resolves a protected navigation by producing exactly one of the two
  /// outcomes. The unchosen closure is never invoked, so an unauthenticated
  /// resolution cannot construct protected content even transiently.
  pub fn resolve<V>(&self, protected: impl FnOnce() -> V, fallback: impl FnOnce() -> V) -> V {
    match self.state() {
      GuardState::Authenticated => protected(),
      GuardState::Unauthenticated => fallback(),
    }
  }

  /// The path unauthenticated navigations are redirected to.
  pub fn redirect_target(&self) -> &str {
    &self.redirect_target
  }
}
