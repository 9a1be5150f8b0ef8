// stylestore_app/tests/config_tests.rs

mod common;
use common::*;

use serial_test::serial;
use stylestore_app::{AppConfig, AppError};

const VARS: [&str; 5] = [
  "STORE_API_BASE_URL",
  "STORE_HTTP_TIMEOUT_SECS",
  "STORE_PAYMENT_DELAY_MS",
  "STORE_CATALOG_PAGE_SIZE",
  "STORE_LIST_PAGE_SIZE",
];

// Process-wide environment, so every test here is #[serial].
fn clear_vars() {
  for var in VARS {
    std::env::remove_var(var);
  }
}

#[test]
#[serial]
fn test_defaults_apply_when_nothing_is_set() {
  setup_tracing();
  clear_vars();

  let config = AppConfig::from_env().expect("defaults should load");

  assert_eq!(config.api_base_url, "https://dummyjson.com");
  assert_eq!(config.http_timeout_secs, 10);
  assert_eq!(config.payment_delay_ms, 2000);
  assert_eq!(config.catalog_page_size, 8);
  assert_eq!(config.list_page_size, 12);
}

#[test]
#[serial]
fn test_environment_overrides_are_picked_up() {
  setup_tracing();
  clear_vars();
  std::env::set_var("STORE_API_BASE_URL", "http://localhost:8080");
  std::env::set_var("STORE_PAYMENT_DELAY_MS", "0");
  std::env::set_var("STORE_CATALOG_PAGE_SIZE", "24");

  let config = AppConfig::from_env().expect("overrides should load");
  clear_vars();

  assert_eq!(config.api_base_url, "http://localhost:8080");
  assert_eq!(config.payment_delay_ms, 0);
  assert_eq!(config.catalog_page_size, 24);
  assert_eq!(config.list_page_size, 12); // Untouched vars keep their defaults.
}

#[test]
#[serial]
fn test_non_numeric_override_is_rejected() {
  setup_tracing();
  clear_vars();
  std::env::set_var("STORE_PAYMENT_DELAY_MS", "soon");

  let err = AppConfig::from_env().unwrap_err();
  clear_vars();

  assert!(matches!(err, AppError::Config(_)));
  assert!(err.to_string().contains("STORE_PAYMENT_DELAY_MS")); // Names the offending variable.
}

#[test]
#[serial]
fn test_default_impl_matches_env_defaults() {
  setup_tracing();
  clear_vars();

  let from_env = AppConfig::from_env().expect("defaults should load");
  let default = AppConfig::default();

  assert_eq!(from_env.api_base_url, default.api_base_url);
  assert_eq!(from_env.http_timeout_secs, default.http_timeout_secs);
  assert_eq!(from_env.payment_delay_ms, default.payment_delay_ms);
  assert_eq!(from_env.catalog_page_size, default.catalog_page_size);
  assert_eq!(from_env.list_page_size, default.list_page_size);
}
