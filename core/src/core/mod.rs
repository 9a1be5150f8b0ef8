pub mod notify;
pub mod shared;

// Re-export key types for easier access from other modules (and lib.rs)
pub use notify::{Listener, SubscriberId, Subscribers};
pub use shared::Shared;
