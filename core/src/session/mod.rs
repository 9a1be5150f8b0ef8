pub mod gateway;
pub mod identity;
pub mod manager;

pub use gateway::AuthGateway;
pub use identity::{Credentials, Identity};
pub use manager::{SessionEvent, SessionManager};
