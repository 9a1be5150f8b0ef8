// stylestore_app/src/main.rs

//! Demo binary: boots the app state and walks the storefront golden path
//! against the live API. Browse the catalog, fill the cart, sign in, pay,
//! then poke around the admin dashboard and sign out.

use stylestore::{CartEvent, Credentials};
use stylestore_app::api::types::{ProductInput, ProductPatch, ProfilePatch};
use stylestore_app::services::payment::format_card_number;
use stylestore_app::{
  resolve, submit_payment, AppConfig, AppError, AppState, CatalogFilter, OrderSummary, PageWindow, PaymentForm,
  Resolution,
};
use tracing::{info, warn};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> stylestore_app::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  info!("Starting storefront demo...");

  let config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };
  let state = AppState::boot(config)?;

  // A navbar badge: re-renders the cart count on every cart event.
  let badge_cart = state.cart.clone();
  state.cart.subscribe(move |event: &CartEvent| {
    info!(count = badge_cart.count(), ?event, "Navbar badge updated");
  });

  // Anonymous visit to the admin dashboard bounces to the login page.
  match resolve("/dashboard", &state.guard) {
    Resolution::Redirect(target) => info!(to = %target.path(), "Dashboard is protected, redirecting"),
    Resolution::Render(route) => warn!(?route, "Dashboard rendered without a session"),
  }

  // Home page: featured products.
  let featured = state.api.products(state.config.catalog_page_size, 0).await?;
  info!(count = featured.products.len(), total = featured.total, "Featured products loaded");

  // Product grid: fetch the catalog once, then filter and page locally.
  let catalog = state.api.products(100, 0).await?;
  let categories = state.api.categories().await?;
  info!(categories = categories.len(), "Category list loaded");

  let filter = CatalogFilter::search("shirt");
  let matches = filter.apply(&catalog.products);
  let window = PageWindow::new(matches.len(), state.config.catalog_page_size as usize);
  let first_page = window.page_slice(&matches, 1);
  info!(matching = matches.len(), pages = window.pages(), showing = first_page.len(), "Filtered product grid");

  // Open the first product's detail page, then put the first two catalog
  // rows in the cart and bump the first one.
  if let Some(first) = catalog.products.first() {
    let detail = state.api.product(first.id).await?;
    info!(id = detail.id, title = %detail.title, stock = detail.stock, "Viewing product details");
  }
  for product in catalog.products.iter().take(2) {
    state.cart.add_item(product.snapshot(), 1);
  }
  if let Some(first) = catalog.products.first() {
    state.cart.update_quantity(first.id, 2);
  }
  info!(items = state.cart.count(), total = state.cart.total(), "Cart ready for checkout");

  // Sign in with the demo account before paying.
  let credentials = Credentials::new("emilys", "emilyspass");
  if let Err(err) = state.session.login(credentials).await {
    warn!(response = %AppError::from(err).user_message(), "Login failed, stopping the tour");
    return Ok(());
  }
  if let Some(user) = state.session.current_user() {
    info!(username = %user.username, name = %user.full_name(), "Signed in");
  }

  // Checkout: review the order, then pay with the demo card.
  let summary = OrderSummary::from_cart(&state.cart);
  info!(lines = summary.lines.len(), subtotal_cents = summary.subtotal_cents, shipping = "Free", "Order summary");

  let form = PaymentForm {
    card_number: format_card_number("4111111111111111"),
    card_holder: "Emily Johnson".to_string(),
    expiry: "12/27".to_string(),
    cvv: "123".to_string(),
  };
  let receipt = submit_payment(&form, &state.cart, state.config.payment_delay_ms).await?;
  info!(
    receipt_id = %receipt.receipt_id,
    amount_cents = receipt.amount_cents,
    paid_at = %receipt.paid_at,
    cart_len = state.cart.len(),
    "Payment accepted"
  );

  // The dashboard now renders; browse its paginated lists.
  if let Resolution::Render(route) = resolve("/dashboard/posts", &state.guard) {
    info!(path = %route.path(), "Dashboard unlocked");
  }
  let posts = state.api.posts(state.config.list_page_size, 0).await?;
  let post_pages = PageWindow::new(posts.total as usize, state.config.list_page_size as usize);
  // The pager jumps by offset; show the second page of posts.
  let page_two = state
    .api
    .posts(state.config.list_page_size, post_pages.offset(2) as u32)
    .await?;
  let comments = state.api.comments(state.config.list_page_size, 0).await?;
  let users = state.api.users(state.config.list_page_size, 0).await?;
  info!(
    posts = posts.posts.len(),
    post_pages = post_pages.pages(),
    page_two = page_two.posts.len(),
    comments = comments.comments.len(),
    users = users.users.len(),
    "Dashboard lists loaded"
  );

  // Settings panel: load and update the demo profile.
  let profile = state.api.user(1).await?;
  let updated = state
    .api
    .update_user(
      profile.id,
      &ProfilePatch {
        first_name: Some(profile.first_name.clone()),
        last_name: Some(profile.last_name.clone()),
        email: Some(profile.email.clone()),
        phone: profile.phone.clone(),
      },
    )
    .await?;
  info!(username = %updated.username, "Profile saved");

  // Admin product CRUD, echoed by the API without persisting.
  let created = state
    .api
    .create_product(&ProductInput {
      title: "Linen Overshirt".to_string(),
      price: 49.99,
      description: "Relaxed fit, garment washed.".to_string(),
      thumbnail: String::new(),
      category: "mens-shirts".to_string(),
      stock: 25,
    })
    .await?;
  info!(id = created.id, title = %created.title, "Product created");

  // Created ids are not persisted server-side; write to an existing one.
  let renamed = state
    .api
    .update_product(
      1,
      &ProductPatch {
        title: Some("Linen Overshirt (washed)".to_string()),
        ..ProductPatch::default()
      },
    )
    .await?;
  info!(id = renamed.id, title = %renamed.title, "Product updated");
  state.api.delete_product(1).await?;
  info!(id = 1, "Product deleted");

  // Sign out; the dashboard locks again.
  state.session.logout();
  if let Resolution::Redirect(target) = resolve("/dashboard", &state.guard) {
    info!(to = %target.path(), "Signed out, dashboard locked");
  }

  info!("Storefront demo finished.");
  Ok(())
}
