// stylestore_app/tests/api_types_tests.rs

mod common;
use common::*;

use serial_test::serial;
use stylestore::Credentials;
use stylestore_app::api::types::{AuthSession, CommentPage, ProductPage, ProductPatch, Profile, ProfilePatch};

// Trimmed-down captures of live responses.
const PRODUCT_PAGE_JSON: &str = r#"{
  "products": [
    {
      "id": 1,
      "title": "Essence Mascara Lash Princess",
      "description": "A popular mascara known for its volumizing effects.",
      "category": "beauty",
      "price": 9.99,
      "discountPercentage": 7.17,
      "rating": 4.94,
      "stock": 5,
      "thumbnail": "https://cdn.example.test/1/thumbnail.png"
    },
    {
      "id": 2,
      "title": "Eyeshadow Palette with Mirror",
      "description": "A versatile palette with a built-in mirror.",
      "category": "beauty",
      "price": 19.99,
      "discountPercentage": 5.5,
      "rating": 3.28,
      "stock": 44,
      "brand": "Glamour Beauty",
      "thumbnail": "https://cdn.example.test/2/thumbnail.png",
      "images": ["https://cdn.example.test/2/1.png", "https://cdn.example.test/2/2.png"]
    }
  ],
  "total": 194,
  "skip": 0,
  "limit": 2
}"#;

const COMMENT_PAGE_JSON: &str = r#"{
  "comments": [
    {
      "id": 1,
      "body": "This is some awesome thinking!",
      "postId": 242,
      "likes": 3,
      "user": { "id": 105, "username": "emmac", "fullName": "Emma Wilson" }
    }
  ],
  "total": 340,
  "skip": 0,
  "limit": 1
}"#;

#[test]
#[serial]
fn test_product_page_decodes_with_optional_fields_defaulted() {
  setup_tracing();
  let page: ProductPage = serde_json::from_str(PRODUCT_PAGE_JSON).expect("page should decode");

  assert_eq!(page.total, 194);
  assert_eq!(page.products.len(), 2);

  let first = &page.products[0];
  assert_eq!(first.brand, None); // Absent in the payload.
  assert!(first.images.is_empty());
  assert_eq!(first.discount_percentage, 7.17);

  let second = &page.products[1];
  assert_eq!(second.brand.as_deref(), Some("Glamour Beauty"));
  assert_eq!(second.images.len(), 2);
}

#[test]
#[serial]
fn test_price_converts_to_cents_once() {
  setup_tracing();
  let page: ProductPage = serde_json::from_str(PRODUCT_PAGE_JSON).expect("page should decode");

  assert_eq!(page.products[0].price_cents(), 999);
  assert_eq!(page.products[1].price_cents(), 1999);

  let snapshot = page.products[1].snapshot();
  assert_eq!(snapshot.unit_price_cents, 1999);
  assert_eq!(snapshot.title, "Eyeshadow Palette with Mirror");
}

#[test]
#[serial]
fn test_comment_page_decodes_nested_author() {
  setup_tracing();
  let page: CommentPage = serde_json::from_str(COMMENT_PAGE_JSON).expect("page should decode");

  let comment = &page.comments[0];
  assert_eq!(comment.post_id, 242);
  assert_eq!(comment.user.username, "emmac");
}

#[test]
#[serial]
fn test_auth_session_accepts_both_token_spellings() {
  setup_tracing();
  let modern = r#"{
    "id": 1, "username": "emilys", "email": "emily@x.test",
    "firstName": "Emily", "lastName": "Johnson",
    "accessToken": "jwt-a", "refreshToken": "jwt-b"
  }"#;
  let legacy = r#"{
    "id": 1, "username": "emilys", "email": "emily@x.test",
    "firstName": "Emily", "lastName": "Johnson",
    "token": "jwt-a"
  }"#;

  let modern: AuthSession = serde_json::from_str(modern).expect("accessToken shape");
  let legacy: AuthSession = serde_json::from_str(legacy).expect("token shape");
  assert_eq!(modern.token, "jwt-a");
  assert_eq!(legacy.token, "jwt-a");

  let identity = modern.into_identity();
  assert_eq!(identity.full_name(), "Emily Johnson");
  assert_eq!(identity.token, "jwt-a");
}

#[test]
#[serial]
fn test_profile_tolerates_missing_phone_and_image() {
  setup_tracing();
  let profile: Profile = serde_json::from_str(
    r#"{"id": 7, "username": "sophiab", "email": "sophia@x.test", "firstName": "Sophia", "lastName": "Brown"}"#,
  )
  .expect("profile should decode");

  assert_eq!(profile.phone, None);
  assert_eq!(profile.image, None);
}

#[test]
#[serial]
fn test_patches_serialize_only_the_set_fields() {
  setup_tracing();
  let patch = ProfilePatch {
    email: Some("new@x.test".to_string()),
    ..ProfilePatch::default()
  };
  let body = serde_json::to_value(&patch).expect("serialize");
  assert_eq!(body, serde_json::json!({"email": "new@x.test"}));

  // An empty patch sends an empty object, not nulls.
  let body = serde_json::to_value(ProductPatch::default()).expect("serialize");
  assert_eq!(body, serde_json::json!({}));
}

#[test]
#[serial]
fn test_credentials_serialize_to_the_login_body() {
  setup_tracing();
  let body = serde_json::to_value(Credentials::new("emilys", "emilyspass")).expect("serialize");
  assert_eq!(body, serde_json::json!({"username": "emilys", "password": "emilyspass"}));
}
