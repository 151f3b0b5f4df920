// tests/web_api_tests.rs
//
// Handler-level tests over routes whose paths stop before the external
// data store: the lazy pool in `common::offline_app_state` is never
// connected.
mod common;

use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use causeforge::services::InMemoryObjectStore;
use causeforge::web::configure_app_routes;
use common::*;

macro_rules! offline_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new($state))
        .configure(configure_app_routes),
    )
    .await
  };
}

#[actix_web::test]
async fn health_endpoint_reports_ok() {
  setup_tracing();
  let app = offline_app!(offline_app_state(Arc::new(InMemoryObjectStore::new())));

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/health").to_request()).await;

  assert!(resp.status().is_success());
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn admin_routes_reject_requests_without_a_session() {
  setup_tracing();
  let app = offline_app!(offline_app_state(Arc::new(InMemoryObjectStore::new())));

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/admin/orders").to_request()).await;
  assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn admin_login_rejects_a_wrong_password() {
  setup_tracing();
  let app = offline_app!(offline_app_state(Arc::new(InMemoryObjectStore::new())));

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/admin/login")
      .set_json(json!({"password": "not the password"}))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn admin_login_issues_a_token_that_logout_revokes() {
  setup_tracing();
  let app = offline_app!(offline_app_state(Arc::new(InMemoryObjectStore::new())));

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/admin/login")
      .set_json(json!({"password": TEST_ADMIN_PASSWORD}))
      .to_request(),
  )
  .await;
  assert!(resp.status().is_success());
  let body: Value = test::read_body_json(resp).await;
  let token = body["token"].as_str().expect("login must return a token").to_string();

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/admin/logout")
      .insert_header(("X-Admin-Token", token.clone()))
      .to_request(),
  )
  .await;
  assert!(resp.status().is_success());

  // The revoked token no longer passes the gate.
  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/admin/logout")
      .insert_header(("X-Admin-Token", token))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn cart_add_rejects_a_non_positive_quantity() {
  setup_tracing();
  let app = offline_app!(offline_app_state(Arc::new(InMemoryObjectStore::new())));

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/cart/items")
      .set_json(json!({
          "product_name": "Custom Phone Stand",
          "price": 25.0,
          "quantity": 0
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn upload_round_trips_through_the_object_store() {
  setup_tracing();
  let store = Arc::new(InMemoryObjectStore::new());
  let app = offline_app!(offline_app_state(store.clone()));

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/uploads/product-images?filename=mug.jpg")
      .set_payload(&b"jpeg-bytes"[..])
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), 201);

  let body: Value = test::read_body_json(resp).await;
  let key = body["path"].as_str().expect("response must carry the key");
  assert!(key.ends_with(".jpg"));
  assert!(store.contains("product-images", key));
  assert_eq!(store.len(), 1);
}

#[actix_web::test]
async fn empty_upload_body_is_rejected() {
  setup_tracing();
  let store = Arc::new(InMemoryObjectStore::new());
  let app = offline_app!(offline_app_state(store.clone()));

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/uploads/product-images?filename=mug.jpg")
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), 400);
  assert!(store.is_empty());
}

#[actix_web::test]
async fn checkout_cancel_acknowledges_without_touching_anything() {
  setup_tracing();
  let app = offline_app!(offline_app_state(Arc::new(InMemoryObjectStore::new())));

  let order_id = Uuid::new_v4();
  let resp = test::call_service(
    &app,
    test::TestRequest::get()
      .uri(&format!("/api/v1/checkout/cancel/{}", order_id))
      .to_request(),
  )
  .await;

  assert!(resp.status().is_success());
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["orderId"], json!(order_id));
}
