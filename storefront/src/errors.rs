// stylestore_app/src/errors.rs

use serde_json::json;
use thiserror::Error;

// Import the state core's error type so gateway/login failures flow through
// unchanged.
use stylestore::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Payment Processing Error: {0}")]
  Payment(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Store API Error ({status}): {message}")]
  Api { status: u16, message: String },

  #[error("Store Core Error: {source}")]
  Store {
    #[from] // Allows conversion from stylestore::StoreError
    source: StoreError,
  },

  #[error("Internal Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in flows that use `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl AppError {
  /// The inline message a form or page surfaces for this failure, as a JSON
  /// value the view layer can render directly.
  pub fn user_message(&self) -> serde_json::Value {
    match self {
      AppError::Validation(m) => json!({"error": m}),
      AppError::NotFound(m) => json!({"error": m}),
      AppError::Payment(m) => json!({"error": "Payment failed", "detail": m}),
      AppError::Config(m) => json!({"error": "Configuration issue", "detail": m}),
      AppError::Api { status, message } => json!({"error": "Store API request failed", "status": status, "detail": message}),
      AppError::Store { source } => match source {
        StoreError::InvalidCredentials { .. } => json!({"error": "Invalid credentials"}),
        StoreError::Network { .. } => json!({"error": "Network problem, please retry"}),
        StoreError::Internal(m) => json!({"error": "An internal error occurred", "detail": m}),
      },
      AppError::Internal(m) => json!({"error": "An internal error occurred", "detail": m}),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
