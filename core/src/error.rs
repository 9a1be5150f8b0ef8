// stylestore/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
  /// The remote collaborator could not be reached, or answered outside its
  /// protocol (malformed body, unexpected status).
  #[error("Network failure talking to the store API. Source: {source}")]
  Network {
    #[source]
    source: AnyhowError,
  },

  /// The auth gateway rejected the supplied username/password pair.
  #[error("Invalid credentials: {reason}")]
  InvalidCredentials { reason: String },

  #[error("Internal store error: {0}")]
  Internal(String),
}

// The conversion gateway implementations lean on: any transport-level
// anyhow::Error becomes a Network failure unless mapped more precisely first.
impl From<AnyhowError> for StoreError {
  fn from(err: AnyhowError) -> Self {
    StoreError::Network { source: err }
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
