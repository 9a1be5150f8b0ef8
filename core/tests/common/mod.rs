// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use stylestore::{AuthGateway, Credentials, Identity, ProductSnapshot, StoreError, StoreResult};
use tracing::Level;

// --- Product fixtures (prices in cents) ---

pub fn cotton_tee() -> ProductSnapshot {
  ProductSnapshot {
    product_id: 1,
    title: "Essential Cotton Tee".to_string(),
    unit_price_cents: 1999, // 19.99
    image_url: "https://cdn.example.com/products/1/thumb.jpg".to_string(),
  }
}

pub fn canvas_tote() -> ProductSnapshot {
  ProductSnapshot {
    product_id: 2,
    title: "Canvas Tote Bag".to_string(),
    unit_price_cents: 1000, // 10.00
    image_url: "https://cdn.example.com/products/2/thumb.jpg".to_string(),
  }
}

pub fn wool_socks() -> ProductSnapshot {
  ProductSnapshot {
    product_id: 3,
    title: "Merino Wool Socks".to_string(),
    unit_price_cents: 500, // 5.00
    image_url: "https://cdn.example.com/products/3/thumb.jpg".to_string(),
  }
}

// --- Session fixtures ---

pub const KNOWN_USERNAME: &str = "emilys";
pub const KNOWN_PASSWORD: &str = "emilyspass";

pub fn emily() -> Identity {
  Identity {
    id: 1,
    username: KNOWN_USERNAME.to_string(),
    email: "emily.johnson@x.dummyjson.com".to_string(),
    first_name: "Emily".to_string(),
    last_name: "Johnson".to_string(),
    token: "test-session-token".to_string(),
  }
}

/// In-memory stand-in for the remote auth endpoint. Accepts exactly one
/// username/password pair; can be flipped into "outage" mode to exercise the
/// network failure path.
pub struct MockGateway {
  pub outage: bool,
  pub calls: Arc<AtomicUsize>,
}

impl MockGateway {
  pub fn accepting() -> Self {
    MockGateway {
      outage: false,
      calls: Arc::new(AtomicUsize::new(0)),
    }
  }

  pub fn unreachable() -> Self {
    MockGateway {
      outage: true,
      calls: Arc::new(AtomicUsize::new(0)),
    }
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl AuthGateway for MockGateway {
  async fn authenticate(&self, credentials: &Credentials) -> StoreResult<Identity> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.outage {
      return Err(StoreError::Network {
        source: anyhow::anyhow!("connection refused"),
      });
    }
    if credentials.username == KNOWN_USERNAME && credentials.password == KNOWN_PASSWORD {
      Ok(emily())
    } else {
      Err(StoreError::InvalidCredentials {
        reason: "username or password is wrong".to_string(),
      })
    }
  }
}

// --- Event recording ---

/// Returns a shared event log plus a listener closure that appends to it.
/// Subscribe the closure, mutate the manager, then assert on the log.
pub fn recorder<E: Clone + Send + 'static>() -> (Arc<Mutex<Vec<E>>>, impl Fn(&E) + Send + Sync + 'static) {
  let log: Arc<Mutex<Vec<E>>> = Arc::new(Mutex::new(Vec::new()));
  let sink = Arc::clone(&log);
  (log, move |event: &E| sink.lock().push(event.clone()))
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
