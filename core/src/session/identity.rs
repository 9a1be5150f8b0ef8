// stylestore/src/session/identity.rs

use serde::{Deserialize, Serialize};

/// The signed-in user as the auth gateway reported them.
///
/// The token is an opaque string trusted as-is: this crate caches it for the
/// UI, it does not verify, refresh, or expire it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
  pub id: u64,
  pub username: String,
  pub email: String,
  pub first_name: String,
  pub last_name: String,
  pub token: String,
}

impl Identity {
  /// Display name for greetings ("Jane Doe").
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

/// A username/password pair, passed to the auth gateway verbatim.
/// Serializes to the login request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl Credentials {
  pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
    Credentials {
      username: username.into(),
      password: password.into(),
    }
  }
}
