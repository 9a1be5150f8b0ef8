// stylestore_app/tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use stylestore::{AuthGateway, Credentials, Identity, StoreError, StoreResult};
use stylestore_app::api::types::Product;
use stylestore_app::services::payment::PaymentForm;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
});

/// Call at the start of each test for `RUST_LOG`-controlled output.
pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub const KNOWN_USERNAME: &str = "emilys";
pub const KNOWN_PASSWORD: &str = "emilyspass";

/// Accepts exactly the known demo credentials, no network involved.
pub struct StubGateway;

#[async_trait]
impl AuthGateway for StubGateway {
  async fn authenticate(&self, credentials: &Credentials) -> StoreResult<Identity> {
    if credentials.username == KNOWN_USERNAME && credentials.password == KNOWN_PASSWORD {
      Ok(Identity {
        id: 1,
        username: KNOWN_USERNAME.to_string(),
        email: "emily.johnson@x.dummyjson.com".to_string(),
        first_name: "Emily".to_string(),
        last_name: "Johnson".to_string(),
        token: "stub-token".to_string(),
      })
    } else {
      Err(StoreError::InvalidCredentials {
        reason: "Invalid credentials".to_string(),
      })
    }
  }
}

/// A catalog row with sensible detail-page defaults.
pub fn product(id: u64, title: &str, price: f64, category: &str, description: &str) -> Product {
  Product {
    id,
    title: title.to_string(),
    price,
    description: description.to_string(),
    thumbnail: format!("https://cdn.example.test/{id}.jpg"),
    category: category.to_string(),
    stock: 25,
    brand: None,
    rating: 4.2,
    discount_percentage: 0.0,
    images: Vec::new(),
  }
}

/// A small apparel catalog for filter tests.
pub fn apparel_catalog() -> Vec<Product> {
  vec![
    product(1, "Classic Cotton Tee", 19.99, "tops", "A soft everyday tee in washed cotton."),
    product(2, "Linen Overshirt", 49.99, "tops", "Relaxed fit, garment washed."),
    product(3, "Canvas Tote", 10.00, "bags", "Carries a laptop and a paperback."),
    product(4, "Wool Hiking Socks", 5.00, "accessories", "Cushioned sole, itch-free wool."),
    product(5, "Denim Jacket", 89.99, "outerwear", "Heavyweight denim with a worn-in wash."),
  ]
}

/// A form the validator accepts.
pub fn demo_form() -> PaymentForm {
  PaymentForm {
    card_number: "4111 1111 1111 1111".to_string(),
    card_holder: "Emily Johnson".to_string(),
    expiry: "12/27".to_string(),
    cvv: "123".to_string(),
  }
}
