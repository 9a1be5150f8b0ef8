// stylestore/src/session/gateway.rs

//! Defines the `AuthGateway` trait, the seam through which the session
//! manager performs remote authentication. The production implementation
//! lives with the HTTP client; tests substitute an in-memory gateway.

use crate::error::StoreResult;
use crate::session::identity::{Credentials, Identity};
use async_trait::async_trait;

/// A remote credential check.
///
/// Implementations exchange a username/password pair for an [`Identity`].
/// Rejected credentials surface as `StoreError::InvalidCredentials`;
/// transport failures as `StoreError::Network`. Implementations hold no
/// session state — that is the manager's job.
#[async_trait]
pub trait AuthGateway: Send + Sync {
  async fn authenticate(&self, credentials: &Credentials) -> StoreResult<Identity>;
}
