// stylestore_app/src/lib.rs

//! Application layer over the `stylestore` state core: the dummyjson API
//! client, catalog shaping, the checkout flow, and the route table the
//! demo binary walks.

pub mod api;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod routes;
pub mod services;
pub mod state;

pub use api::StoreApi;
pub use catalog::{CatalogFilter, PageWindow};
pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use routes::{resolve, Panel, Resolution, Route};
pub use services::checkout::{submit_payment, OrderLine, OrderSummary};
pub use services::payment::{format_card_number, process_payment, PaymentForm, PaymentReceipt};
pub use state::AppState;
