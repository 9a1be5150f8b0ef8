// stylestore/examples/cart_walkthrough.rs

use stylestore::{CartEvent, CartManager, ProductSnapshot};
use tracing::info;

fn snapshot(product_id: u64, title: &str, unit_price_cents: i64) -> ProductSnapshot {
  ProductSnapshot {
    product_id,
    title: title.to_string(),
    unit_price_cents,
    image_url: format!("https://cdn.example.com/products/{}/thumb.jpg", product_id),
  }
}

fn main() {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Cart Walkthrough ---");

  // 1. One cart per session, created at boot.
  let cart = CartManager::new();

  // 2. A view (say, the navbar badge) subscribes for changes. The handle it
  //    captures is a clone; both observe the same cart.
  let badge = cart.clone();
  cart.subscribe(move |event: &CartEvent| {
    info!(?event, badge_count = badge.count(), "navbar badge re-rendered");
  });

  // 3. The shopper browses and adds products.
  cart.add_item(snapshot(1, "Essential Cotton Tee", 1999), 1);
  cart.add_item(snapshot(2, "Canvas Tote Bag", 1000), 2);
  cart.add_item(snapshot(1, "Essential Cotton Tee", 1999), 2); // Merges into row 1

  info!(
    rows = cart.len(),
    units = cart.count(),
    total = cart.total(),
    "after browsing"
  );

  // 4. Quantity edits clamp at one instead of deleting the row.
  cart.update_quantity(2, 0);
  info!(units = cart.count(), "after clamping the tote to 1");

  // 5. Removal is explicit.
  cart.remove_item(1);
  info!(rows = cart.len(), total = cart.total(), "after removing the tee");

  // 6. Checkout success empties the cart.
  cart.clear();
  info!(empty = cart.is_empty(), "after clear");
}
