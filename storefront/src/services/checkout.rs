// stylestore_app/src/services/checkout.rs

//! Checkout: snapshot the cart into an order summary, collect payment,
//! and empty the cart once the receipt is in hand.

use crate::errors::{AppError, Result};
use crate::services::payment::{process_payment, PaymentForm, PaymentReceipt};
use serde::Serialize;
use stylestore::{CartManager, LineItem};
use tracing::{info, instrument};

/// One row of the order summary.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
  pub product_id: u64,
  pub title: String,
  pub quantity: u32,
  pub unit_price_cents: i64,
  pub line_total_cents: i64,
}

impl OrderLine {
  fn from_line_item(item: &LineItem) -> Self {
    OrderLine {
      product_id: item.product_id,
      title: item.title.clone(),
      quantity: item.quantity,
      unit_price_cents: item.unit_price_cents,
      line_total_cents: item.line_total_cents(),
    }
  }
}

/// What the checkout page shows: the cart frozen into lines plus totals.
/// Shipping is free for every order, so the total equals the subtotal.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
  pub lines: Vec<OrderLine>,
  pub subtotal_cents: i64,
  pub shipping_cents: i64,
  pub total_cents: i64,
}

impl OrderSummary {
  pub fn from_cart(cart: &CartManager) -> Self {
    let lines: Vec<OrderLine> = cart.items().iter().map(OrderLine::from_line_item).collect();
    let subtotal_cents: i64 = lines.iter().map(|line| line.line_total_cents).sum();
    let shipping_cents = 0;
    OrderSummary {
      lines,
      subtotal_cents,
      shipping_cents,
      total_cents: subtotal_cents + shipping_cents,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Order total in display units.
  pub fn total(&self) -> f64 {
    self.total_cents as f64 / 100.0
  }
}

/// Runs the whole payment step for the current cart.
///
/// The cart is only cleared after the provider accepts; a validation
/// failure or provider error leaves it untouched so the user can retry.
#[instrument(skip_all, fields(lines, total_cents))]
pub async fn submit_payment(form: &PaymentForm, cart: &CartManager, delay_ms: u64) -> Result<PaymentReceipt> {
  let summary = OrderSummary::from_cart(cart);
  tracing::Span::current().record("lines", summary.lines.len());
  tracing::Span::current().record("total_cents", summary.total_cents);

  if summary.is_empty() {
    return Err(AppError::Validation("Your cart is empty.".to_string()));
  }

  let receipt = process_payment(form, summary.total_cents, delay_ms).await?;
  cart.clear();
  info!(order_total_cents = summary.total_cents, "Order placed, cart cleared");
  Ok(receipt)
}
