// stylestore/src/cart/line_item.rs

use serde::{Deserialize, Serialize};

/// The display fields of a product, captured at the moment it is added to
/// the cart. Prices are carried as integer minor units (cents); a later
/// catalog price change does not reprice rows already in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
  pub product_id: u64,
  pub title: String,
  pub unit_price_cents: i64,
  pub image_url: String,
}

/// One cart row: a product snapshot plus how many of it the shopper wants.
///
/// A cart holds at most one `LineItem` per `product_id`; adding the same
/// product again increments `quantity` instead of appending a duplicate row.
/// `quantity` is always at least 1 — a row that would drop below that is
/// either clamped or removed explicitly, never left at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
  pub product_id: u64,
  pub title: String,
  pub unit_price_cents: i64,
  pub quantity: u32,
  pub image_url: String,
}

impl LineItem {
  pub fn from_snapshot(snapshot: ProductSnapshot, quantity: u32) -> Self {
    LineItem {
      product_id: snapshot.product_id,
      title: snapshot.title,
      unit_price_cents: snapshot.unit_price_cents,
      quantity: quantity.max(1),
      image_url: snapshot.image_url,
    }
  }

  /// Price of this row: unit price times quantity, in cents.
  pub fn line_total_cents(&self) -> i64 {
    self.unit_price_cents * i64::from(self.quantity)
  }
}
