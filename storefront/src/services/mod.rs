// stylestore_app/src/services/mod.rs

pub mod checkout;
pub mod payment;
