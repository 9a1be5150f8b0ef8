// stylestore_app/src/api/types.rs

//! Wire types for the store API. Field names follow the remote JSON
//! (camelCase); page envelopes carry the collection under a key named after
//! the resource plus `total`/`skip`/`limit`.

use serde::{Deserialize, Serialize};
use stylestore::{Identity, ProductSnapshot};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: u64,
  pub title: String,
  /// Major-unit decimal price as served by the API. Convert once via
  /// [`Product::price_cents`] before any arithmetic.
  pub price: f64,
  pub description: String,
  pub thumbnail: String,
  pub category: String,
  pub stock: u32,
  #[serde(default)]
  pub brand: Option<String>,
  #[serde(default)]
  pub rating: f64,
  #[serde(default)]
  pub discount_percentage: f64,
  /// Detail responses carry a gallery; list responses may omit it.
  #[serde(default)]
  pub images: Vec<String>,
}

impl Product {
  /// The integer-cent price used everywhere downstream of ingestion.
  pub fn price_cents(&self) -> i64 {
    (self.price * 100.0).round() as i64
  }

  /// Captures the display fields the cart keeps for this product.
  pub fn snapshot(&self) -> ProductSnapshot {
    ProductSnapshot {
      product_id: self.id,
      title: self.title.clone(),
      unit_price_cents: self.price_cents(),
      image_url: self.thumbnail.clone(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductPage {
  pub products: Vec<Product>,
  pub total: u32,
  pub skip: u32,
  pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
  pub id: u64,
  pub title: String,
  pub body: String,
  pub user_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostPage {
  pub posts: Vec<Post>,
  pub total: u32,
  pub skip: u32,
  pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  pub id: u64,
  pub body: String,
  pub post_id: u64,
  pub user: CommentAuthor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentAuthor {
  pub id: u64,
  pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentPage {
  pub comments: Vec<Comment>,
  pub total: u32,
  pub skip: u32,
  pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub id: u64,
  pub username: String,
  pub email: String,
  pub first_name: String,
  pub last_name: String,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default)]
  pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserPage {
  pub users: Vec<Profile>,
  pub total: u32,
  pub skip: u32,
  pub limit: u32,
}

/// Successful login payload: the signed-in user's fields plus the session
/// token, flat in one object.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
  pub id: u64,
  pub username: String,
  pub email: String,
  pub first_name: String,
  pub last_name: String,
  #[serde(default)]
  pub image: Option<String>,
  // Newer API revisions renamed `token` to `accessToken`; accept both.
  #[serde(alias = "accessToken")]
  pub token: String,
}

impl AuthSession {
  pub fn into_identity(self) -> Identity {
    Identity {
      id: self.id,
      username: self.username,
      email: self.email,
      first_name: self.first_name,
      last_name: self.last_name,
      token: self.token,
    }
  }
}

/// Body for creating a product (everything but the server-assigned id).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
  pub title: String,
  pub price: f64,
  pub description: String,
  pub thumbnail: String,
  pub category: String,
  pub stock: u32,
}

/// Partial product update; only the set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumbnail: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub stock: Option<u32>,
}

/// Partial profile update for the settings panel.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub first_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
}
