// stylestore_app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  /// Base URL of the remote store API.
  pub api_base_url: String,
  /// Per-request timeout for the HTTP client, in seconds.
  pub http_timeout_secs: u64,
  /// Simulated card-processing time, in milliseconds.
  pub payment_delay_ms: u64,
  /// Products shown per catalog page.
  pub catalog_page_size: u32,
  /// Rows shown per dashboard list page (posts, comments, users).
  pub list_page_size: u32,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let api_base_url = get_env("STORE_API_BASE_URL").unwrap_or_else(|_| "https://dummyjson.com".to_string());
    let http_timeout_secs = get_env("STORE_HTTP_TIMEOUT_SECS")
      .unwrap_or_else(|_| "10".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid STORE_HTTP_TIMEOUT_SECS: {}", e)))?;
    let payment_delay_ms = get_env("STORE_PAYMENT_DELAY_MS")
      .unwrap_or_else(|_| "2000".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid STORE_PAYMENT_DELAY_MS: {}", e)))?;
    let catalog_page_size = get_env("STORE_CATALOG_PAGE_SIZE")
      .unwrap_or_else(|_| "8".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid STORE_CATALOG_PAGE_SIZE: {}", e)))?;
    let list_page_size = get_env("STORE_LIST_PAGE_SIZE")
      .unwrap_or_else(|_| "12".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid STORE_LIST_PAGE_SIZE: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      api_base_url,
      http_timeout_secs,
      payment_delay_ms,
      catalog_page_size,
      list_page_size,
    })
  }
}

impl Default for AppConfig {
  /// The values a fresh checkout of the app runs with when no environment
  /// overrides are present.
  fn default() -> Self {
    AppConfig {
      api_base_url: "https://dummyjson.com".to_string(),
      http_timeout_secs: 10,
      payment_delay_ms: 2000,
      catalog_page_size: 8,
      list_page_size: 12,
    }
  }
}
