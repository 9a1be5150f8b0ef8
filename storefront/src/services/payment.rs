// stylestore_app/src/services/payment.rs

//! Card form validation and the simulated payment provider.
//!
//! No real gateway is involved. The provider sleeps for the configured
//! delay and hands back a receipt with a generated intent id, which is
//! exactly as much as the checkout flow needs.

use crate::errors::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

/// Raw values from the payment form, as typed (spaces allowed in the
/// card number).
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
  pub card_number: String,
  pub card_holder: String,
  /// `MM/YY`.
  pub expiry: String,
  pub cvv: String,
}

impl PaymentForm {
  /// Checks the form the way the payment page does before submitting.
  /// Only the format is checked; an expired date is not rejected.
  pub fn validate(&self) -> Result<()> {
    if digits(&self.card_number).len() != 16 {
      return Err(AppError::Validation("Card number must be 16 digits.".to_string()));
    }
    if self.card_holder.trim().is_empty() {
      return Err(AppError::Validation("Card holder name is required.".to_string()));
    }
    validate_expiry(&self.expiry)?;
    let cvv = self.cvv.trim();
    if cvv.len() != 3 || !cvv.chars().all(|c| c.is_ascii_digit()) {
      return Err(AppError::Validation("CVV must be 3 digits.".to_string()));
    }
    Ok(())
  }
}

fn validate_expiry(expiry: &str) -> Result<()> {
  let (month, year) = expiry
    .trim()
    .split_once('/')
    .ok_or_else(|| AppError::Validation("Expiry must be in MM/YY format.".to_string()))?;
  if month.len() != 2 || year.len() != 2 || !month.chars().all(|c| c.is_ascii_digit()) || !year.chars().all(|c| c.is_ascii_digit()) {
    return Err(AppError::Validation("Expiry must be in MM/YY format.".to_string()));
  }
  let month: u32 = month.parse().map_err(|_| AppError::Validation("Expiry must be in MM/YY format.".to_string()))?;
  if !(1..=12).contains(&month) {
    return Err(AppError::Validation("Expiry month must be between 01 and 12.".to_string()));
  }
  Ok(())
}

fn digits(raw: &str) -> String {
  raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reformats a card number as the user types: digits only, grouped in
/// fours, capped at 16 digits.
pub fn format_card_number(raw: &str) -> String {
  let digits = digits(raw);
  let capped = &digits[..digits.len().min(16)];
  capped
    .as_bytes()
    .chunks(4)
    .map(|group| std::str::from_utf8(group).unwrap_or_default())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Proof of a completed (simulated) payment.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
  pub receipt_id: String,
  pub amount_cents: i64,
  pub paid_at: DateTime<Utc>,
}

/// Runs the simulated provider: validates the form, waits `delay_ms` to
/// mimic a processing round-trip, then issues a receipt.
#[instrument(skip(form), fields(amount_cents = amount_cents))]
pub async fn process_payment(form: &PaymentForm, amount_cents: i64, delay_ms: u64) -> Result<PaymentReceipt> {
  form.validate()?;
  if amount_cents <= 0 {
    return Err(AppError::Payment("Payment amount must be positive.".to_string()));
  }

  info!("Processing payment for {} cents", amount_cents);
  tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;

  let receipt = PaymentReceipt {
    receipt_id: format!("mock_pi_{}", Uuid::new_v4()),
    amount_cents,
    paid_at: Utc::now(),
  };
  info!("Payment successful. Receipt ID: {}", receipt.receipt_id);
  Ok(receipt)
}
