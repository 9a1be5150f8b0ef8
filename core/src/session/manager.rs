// stylestore/src/session/manager.rs

//! The session state manager: a per-process cache of "who is signed in".
//!
//! Authentication itself is delegated to an [`AuthGateway`]; this manager
//! only stores the resulting identity and answers the authenticated
//! predicate. It is a UX cache, not a security boundary — the token is
//! never verified locally.

use crate::core::notify::{SubscriberId, Subscribers};
use crate::core::shared::Shared;
use crate::error::StoreResult;
use crate::session::gateway::AuthGateway;
use crate::session::identity::{Credentials, Identity};
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Change notification emitted by [`SessionManager`] after the session
/// transitions between signed-in and signed-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
  LoggedIn { username: String },
  LoggedOut,
}

/// Holds the current user, if any. Cloning the manager clones the handle;
/// all clones observe the same session.
#[derive(Clone)]
pub struct SessionManager {
  current_user: Shared<Option<Identity>>,
  gateway: Arc<dyn AuthGateway>,
  subscribers: Subscribers<SessionEvent>,
}

impl SessionManager {
  /// Creates a signed-out session backed by the given gateway.
  pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
    SessionManager {
      current_user: Shared::new(None),
      gateway,
      subscribers: Subscribers::new(),
    }
  }

  /// Exchanges credentials for a session via the gateway.
  ///
  /// On success the returned identity becomes the current user (replacing
  /// any previous one) and `SessionEvent::LoggedIn` is emitted. On failure
  /// the stored session is left exactly as it was and the error is returned
  /// to the caller.
  #[instrument(
    name = "SessionManager::login",
    skip_all,
    fields(username = %credentials.username),
    err(Display)
  )]
  pub async fn login(&self, credentials: Credentials) -> StoreResult<Identity> {
    event!(Level::DEBUG, "Delegating credential check to auth gateway.");
    let identity = self.gateway.authenticate(&credentials).await?;

    // The gateway call is over; from here the update is purely local.
    {
      *self.current_user.write() = Some(identity.clone());
    }
    event!(Level::INFO, user_id = identity.id, "Session established.");
    self.subscribers.emit(&SessionEvent::LoggedIn {
      username: identity.username.clone(),
    });
    Ok(identity)
  }

  /// Clears the session. Always succeeds; logging out while signed out is a
  /// silent no-op and emits nothing.
  pub fn logout(&self) {
    let was_signed_in = self.current_user.update(|user| user.take().is_some());
    if was_signed_in {
      event!(Level::INFO, "Session cleared.");
      self.subscribers.emit(&SessionEvent::LoggedOut);
    }
  }

  /// True while an identity is stored.
  pub fn is_authenticated(&self) -> bool {
    self.current_user.with(Option::is_some)
  }

  /// Owned snapshot of the current user, `None` while signed out.
  pub fn current_user(&self) -> Option<Identity> {
    self.current_user.snapshot()
  }

  /// Registers a listener for session transitions.
  pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + Send + Sync + 'static) -> SubscriberId {
    self.subscribers.subscribe(listener)
  }

  /// Removes a previously registered listener.
  pub fn unsubscribe(&self, id: SubscriberId) -> bool {
    self.subscribers.unsubscribe(id)
  }
}

impl std::fmt::Debug for SessionManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SessionManager")
      .field("authenticated", &self.is_authenticated())
      .finish()
  }
}
