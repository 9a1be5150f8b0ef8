// src/lib.rs

//! StyleStore core: headless storefront state management for Rust.
//!
//! This crate holds the session-scoped state a storefront UI renders from,
//! with no opinion about the UI itself:
//!  - A shopping cart manager (merge-by-product rows, snapshot pricing,
//!    quantity clamping, integer-cent totals).
//!  - A session manager that delegates authentication to a pluggable
//!    gateway and caches the resulting identity.
//!  - A route guard that resolves protected navigations without ever
//!    constructing content the visitor may not see.
//!  - The `Shared<T>` cell and typed subscriber registry these managers
//!    stand on.

// Declare modules according to the planned structure
pub mod core;
pub mod cart;
pub mod session;
pub mod guard;
pub mod error;

// --- Re-exports for the Public API ---

// Primitives views and managers build on
pub use crate::core::notify::{Listener, SubscriberId, Subscribers};
pub use crate::core::shared::Shared;

// The state managers themselves
pub use crate::cart::{CartEvent, CartManager, LineItem, ProductSnapshot};
pub use crate::session::{AuthGateway, Credentials, Identity, SessionEvent, SessionManager};

// Navigation guarding
pub use crate::guard::{GuardState, RouteGuard};

pub use crate::error::{StoreError, StoreResult};

/*
    Typical wiring:
    1. Implement `AuthGateway` over your HTTP client (or reuse one that does).
    2. At boot, create one `CartManager` and one `SessionManager::new(gateway)`.
    3. Mount a `RouteGuard::new(session.clone(), "/login")` in front of
       protected routes.
    4. Hand clones of the managers to whichever views need them; subscribe
       for change events where the UI must react.
*/
