// stylestore/src/cart/manager.rs

//! The shopping cart state manager.
//!
//! All mutation funnels through one `CartManager`; views hold clones of the
//! manager and read owned snapshots. Every mutating operation is a single
//! synchronous critical section, and change events are delivered only after
//! the state lock is released.

use crate::cart::line_item::{LineItem, ProductSnapshot};
use crate::core::notify::{SubscriberId, Subscribers};
use crate::core::shared::Shared;
use tracing::{event, Level};

/// Change notification emitted by [`CartManager`] after a mutation that
/// altered observable state. No event is emitted for no-ops (removing an
/// absent id, clamping to the value already stored, clearing an empty cart).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
  /// A row was appended or merged. `quantity` is the row's quantity after
  /// the add.
  ItemAdded { product_id: u64, quantity: u32 },
  ItemRemoved { product_id: u64 },
  /// `quantity` is the stored value after clamping.
  QuantityChanged { product_id: u64, quantity: u32 },
  Cleared,
}

/// Session-scoped shopping cart.
///
/// Holds at most one row per product; rows keep the price captured when the
/// product was first added. Cloning the manager clones the handle, not the
/// cart.
#[derive(Debug, Clone, Default)]
pub struct CartManager {
  items: Shared<Vec<LineItem>>,
  subscribers: Subscribers<CartEvent>,
}

impl CartManager {
  /// Creates an empty cart.
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `quantity` of the product to the cart. If a row for the product
  /// already exists its quantity is incremented; otherwise a new row is
  /// appended at the end. A requested quantity of 0 is treated as 1.
  pub fn add_item(&self, snapshot: ProductSnapshot, quantity: u32) {
    let change = self.items.update(|items| {
      match items.iter_mut().find(|item| item.product_id == snapshot.product_id) {
        Some(existing) => {
          existing.quantity += quantity.max(1);
          CartEvent::ItemAdded {
            product_id: existing.product_id,
            quantity: existing.quantity,
          }
        }
        None => {
          let item = LineItem::from_snapshot(snapshot, quantity);
          let change = CartEvent::ItemAdded {
            product_id: item.product_id,
            quantity: item.quantity,
          };
          items.push(item);
          change
        }
      }
    });
    event!(Level::DEBUG, ?change, "Cart item added.");
    self.subscribers.emit(&change);
  }

  /// Removes the row for `product_id` entirely, regardless of quantity.
  /// Removing an id that is not in the cart is a silent no-op.
  pub fn remove_item(&self, product_id: u64) {
    let removed = self.items.update(|items| {
      let before = items.len();
      items.retain(|item| item.product_id != product_id);
      items.len() != before
    });
    if removed {
      event!(Level::DEBUG, product_id, "Cart item removed.");
      self.subscribers.emit(&CartEvent::ItemRemoved { product_id });
    }
  }

  /// Sets the quantity for `product_id`, clamping values below 1 up to 1.
  /// This operation never removes a row; use [`CartManager::remove_item`]
  /// for that. Updating an id that is not in the cart is a no-op.
  pub fn update_quantity(&self, product_id: u64, new_quantity: u32) {
    let changed_to = self.items.update(|items| {
      let item = items.iter_mut().find(|item| item.product_id == product_id)?;
      let clamped = new_quantity.max(1);
      if item.quantity == clamped {
        return None;
      }
      item.quantity = clamped;
      Some(clamped)
    });
    if let Some(quantity) = changed_to {
      event!(Level::DEBUG, product_id, quantity, "Cart quantity changed.");
      self.subscribers.emit(&CartEvent::QuantityChanged { product_id, quantity });
    }
  }

  /// Empties the cart. Clearing an already-empty cart emits nothing.
  pub fn clear(&self) {
    let was_empty = self.items.update(|items| {
      let was_empty = items.is_empty();
      items.clear();
      was_empty
    });
    if !was_empty {
      event!(Level::DEBUG, "Cart cleared.");
      self.subscribers.emit(&CartEvent::Cleared);
    }
  }

  /// Owned snapshot of the rows, in insertion order.
  pub fn items(&self) -> Vec<LineItem> {
    self.items.snapshot()
  }

  /// Sum of `unit_price * quantity` over all rows, in cents.
  pub fn total_cents(&self) -> i64 {
    self.items.with(|items| items.iter().map(LineItem::line_total_cents).sum())
  }

  /// The cart total as a major-unit value with exactly two decimals of
  /// information (derived from cents, so 3 × 19.99 is 59.97, not 59.969…).
  /// 0.0 for an empty cart.
  pub fn total(&self) -> f64 {
    self.total_cents() as f64 / 100.0
  }

  /// Total number of units across all rows. This is the cart-badge number:
  /// two rows with quantities 2 and 3 count as 5.
  pub fn count(&self) -> u32 {
    self.items.with(|items| items.iter().map(|item| item.quantity).sum())
  }

  /// Number of distinct rows.
  pub fn len(&self) -> usize {
    self.items.with(Vec::len)
  }

  pub fn is_empty(&self) -> bool {
    self.items.with(Vec::is_empty)
  }

  /// Registers a listener for cart change events.
  pub fn subscribe(&self, listener: impl Fn(&CartEvent) + Send + Sync + 'static) -> SubscriberId {
    self.subscribers.subscribe(listener)
  }

  /// Removes a previously registered listener.
  pub fn unsubscribe(&self, id: SubscriberId) -> bool {
    self.subscribers.unsubscribe(id)
  }
}
