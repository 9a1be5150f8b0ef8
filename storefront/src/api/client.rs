// stylestore_app/src/api/client.rs

//! `StoreApi`, the typed JSON client for the remote store.
//!
//! One client per process, cheap to clone. All methods map failures the same
//! way: transport problems become `StoreError::Network`, a 404 becomes
//! `AppError::NotFound`, a rejected login becomes
//! `StoreError::InvalidCredentials`, and any other non-2xx status surfaces
//! as `AppError::Api` with the upstream status code.

use crate::api::types::{
  AuthSession, CommentPage, PostPage, Product, ProductInput, ProductPage, ProductPatch, Profile, ProfilePatch,
  UserPage,
};
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stylestore::{AuthGateway, Credentials, Identity, StoreError, StoreResult};
use tracing::{event, instrument, Level};

/// Error envelope the API uses for rejections: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct ApiMessage {
  message: String,
}

#[derive(Debug, Clone)]
pub struct StoreApi {
  http: reqwest::Client,
  base_url: Url,
}

impl StoreApi {
  pub fn new(config: &AppConfig) -> Result<Self> {
    // The base URL must be absolute; paths are joined per request.
    let base_url = Url::parse(&config.api_base_url)
      .map_err(|e| AppError::Config(format!("Invalid store API base URL '{}': {}", config.api_base_url, e)))?;
    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.http_timeout_secs))
      .build()
      .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
    Ok(StoreApi { http, base_url })
  }

  fn url(&self, path: &str) -> Result<Url> {
    self
      .base_url
      .join(path)
      .map_err(|e| AppError::Internal(format!("Invalid request path '{}': {}", path, e)))
  }

  /// GET `path` and decode the JSON body.
  async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
    let url = self.url(path)?;
    event!(Level::DEBUG, %url, "Store API GET.");
    let response = self
      .http
      .get(url)
      .query(query)
      .send()
      .await
      .map_err(|e| StoreError::Network {
        source: anyhow::Error::new(e),
      })?;
    Self::decode(path, response).await
  }

  /// Send a JSON body with `method` and decode the JSON response.
  async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
    &self,
    method: Method,
    path: &str,
    body: &B,
  ) -> Result<T> {
    let url = self.url(path)?;
    event!(Level::DEBUG, %url, %method, "Store API write.");
    let response = self
      .http
      .request(method, url)
      .json(body)
      .send()
      .await
      .map_err(|e| StoreError::Network {
        source: anyhow::Error::new(e),
      })?;
    Self::decode(path, response).await
  }

  async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
      return Err(AppError::NotFound(format!("'{}' was not found upstream", path)));
    }
    if !status.is_success() {
      let message = response.text().await.unwrap_or_default();
      event!(Level::WARN, status = status.as_u16(), %path, "Store API rejected the request.");
      return Err(AppError::Api {
        status: status.as_u16(),
        message,
      });
    }
    // A 2xx body that fails to decode is an out-of-protocol answer.
    response.json::<T>().await.map_err(|e| {
      AppError::Store {
        source: StoreError::Network {
          source: anyhow::Error::new(e),
        },
      }
    })
  }

  /// POST the credentials to the auth endpoint.
  ///
  /// The API answers a bad pair with 400/401 plus a `message` body; both map
  /// to `StoreError::InvalidCredentials` so login forms can tell a typo from
  /// an outage.
  #[instrument(name = "StoreApi::login", skip_all, fields(username = %credentials.username), err(Display))]
  pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
    let url = self.url("auth/login")?;
    let response = self
      .http
      .post(url)
      .json(credentials)
      .send()
      .await
      .map_err(|e| StoreError::Network {
        source: anyhow::Error::new(e),
      })?;

    let status = response.status();
    if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
      let reason = response
        .json::<ApiMessage>()
        .await
        .map(|m| m.message)
        .unwrap_or_else(|_| "Login failed".to_string());
      return Err(AppError::Store {
        source: StoreError::InvalidCredentials { reason },
      });
    }
    Self::decode("auth/login", response).await
  }

  // --- Catalog ---

  pub async fn products(&self, limit: u32, skip: u32) -> Result<ProductPage> {
    self
      .get_json("products", &[("limit", limit.to_string()), ("skip", skip.to_string())])
      .await
  }

  pub async fn product(&self, id: u64) -> Result<Product> {
    self.get_json(&format!("products/{}", id), &[]).await
  }

  pub async fn categories(&self) -> Result<Vec<String>> {
    self.get_json("products/category-list", &[]).await
  }

  // --- Dashboard lists ---

  pub async fn posts(&self, limit: u32, skip: u32) -> Result<PostPage> {
    self
      .get_json("posts", &[("limit", limit.to_string()), ("skip", skip.to_string())])
      .await
  }

  pub async fn comments(&self, limit: u32, skip: u32) -> Result<CommentPage> {
    self
      .get_json("comments", &[("limit", limit.to_string()), ("skip", skip.to_string())])
      .await
  }

  pub async fn users(&self, limit: u32, skip: u32) -> Result<UserPage> {
    self
      .get_json("users", &[("limit", limit.to_string()), ("skip", skip.to_string())])
      .await
  }

  pub async fn user(&self, id: u64) -> Result<Profile> {
    self.get_json(&format!("users/{}", id), &[]).await
  }

  // --- Admin CRUD (fire-and-forget from the state core's perspective) ---

  #[instrument(name = "StoreApi::create_product", skip_all, fields(title = %input.title), err(Display))]
  pub async fn create_product(&self, input: &ProductInput) -> Result<Product> {
    self.send_json(Method::POST, "products/add", input).await
  }

  #[instrument(name = "StoreApi::update_product", skip_all, fields(product_id = id), err(Display))]
  pub async fn update_product(&self, id: u64, patch: &ProductPatch) -> Result<Product> {
    self.send_json(Method::PUT, &format!("products/{}", id), patch).await
  }

  #[instrument(name = "StoreApi::delete_product", skip(self), err(Display))]
  pub async fn delete_product(&self, id: u64) -> Result<()> {
    let url = self.url(&format!("products/{}", id))?;
    let response = self.http.delete(url).send().await.map_err(|e| StoreError::Network {
      source: anyhow::Error::new(e),
    })?;
    // The body echoes the deleted product; only the status matters here.
    let _: Product = Self::decode(&format!("products/{}", id), response).await?;
    Ok(())
  }

  #[instrument(name = "StoreApi::update_user", skip_all, fields(user_id = id), err(Display))]
  pub async fn update_user(&self, id: u64, patch: &ProfilePatch) -> Result<Profile> {
    self.send_json(Method::PUT, &format!("users/{}", id), patch).await
  }
}

// The session manager sees the client only through this seam.
#[async_trait]
impl AuthGateway for StoreApi {
  async fn authenticate(&self, credentials: &Credentials) -> StoreResult<Identity> {
    match self.login(credentials).await {
      Ok(session) => Ok(session.into_identity()),
      Err(AppError::Store { source }) => Err(source),
      Err(other) => Err(StoreError::Network {
        source: anyhow::Error::new(other),
      }),
    }
  }
}
