pub mod line_item;
pub mod manager;

pub use line_item::{LineItem, ProductSnapshot};
pub use manager::{CartEvent, CartManager};
