// src/web/handlers/admin_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::db::{orders, payment_keys};
use crate::errors::AppError;
use crate::models::OrderStatus;
use crate::services::auth_service;
use crate::state::AppState;
use crate::web::extractors::AdminSession;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct AdminLoginPayload {
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusPayload {
  pub status: String,
  pub tracking_number: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct UpdatePaymentKeysPayload {
  pub publishable_key: String,
  pub secret_key: String,
}

#[instrument(name = "handler::admin_login", skip_all)]
pub async fn admin_login_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AdminLoginPayload>,
) -> Result<HttpResponse, AppError> {
  let matches = auth_service::verify_password(&app_state.config.admin_password_hash, &payload.password)?;
  if !matches {
    warn!("Admin login rejected: wrong password.");
    return Err(AppError::Auth("Invalid admin password.".to_string()));
  }

  let token = app_state.admin_sessions.issue();
  info!("Admin session issued.");
  Ok(HttpResponse::Ok().json(json!({
      "message": "Admin login successful.",
      "token": token
  })))
}

#[instrument(name = "handler::admin_logout", skip_all)]
pub async fn admin_logout_handler(
  app_state: web::Data<AppState>,
  session: AdminSession,
) -> Result<HttpResponse, AppError> {
  app_state.admin_sessions.revoke(&session.token);
  info!("Admin session revoked.");
  Ok(HttpResponse::Ok().json(json!({"message": "Logged out."})))
}

#[instrument(name = "handler::admin_list_orders", skip_all)]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  _session: AdminSession,
) -> Result<HttpResponse, AppError> {
  // TODO: paginate once the order volume makes full listings impractical.
  let (all_orders, skipped) = orders::list_orders(&app_state.db_pool).await?;
  info!("Fetched {} orders for admin view ({} skipped).", all_orders.len(), skipped);
  Ok(HttpResponse::Ok().json(json!({
      "message": "Orders fetched successfully.",
      "orders": all_orders,
      "skippedInvalid": skipped
  })))
}

#[instrument(
    name = "handler::admin_update_order_status",
    skip(app_state, _session, path, payload),
    fields(order_id = %path.as_ref(), status = %payload.status)
)]
pub async fn update_order_status_handler(
  app_state: web::Data<AppState>,
  _session: AdminSession,
  path: web::Path<Uuid>,
  payload: web::Json<UpdateOrderStatusPayload>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  let payload = payload.into_inner();

  // Closed-set parse; unknown strings are a 400, never written through.
  let status = OrderStatus::from_str(&payload.status)?;

  let touched =
    orders::update_order_status(&app_state.db_pool, order_id, status, payload.tracking_number.as_deref()).await?;
  if !touched {
    return Err(AppError::NotFound(format!("Order {} not found.", order_id)));
  }

  info!("Order {} moved to status '{}'.", order_id, status);
  Ok(HttpResponse::Ok().json(json!({
      "message": "Order status updated.",
      "orderId": order_id,
      "status": status
  })))
}

#[instrument(name = "handler::admin_get_payment_keys", skip_all)]
pub async fn get_payment_keys_handler(
  app_state: web::Data<AppState>,
  _session: AdminSession,
) -> Result<HttpResponse, AppError> {
  match payment_keys::fetch_payment_keys(&app_state.db_pool).await? {
    Some(keys) => Ok(HttpResponse::Ok().json(json!({
        "configured": true,
        "publishableKey": keys.publishable_key,
        "secretKey": keys.masked_secret(),
        "updatedAt": keys.updated_at
    }))),
    None => Ok(HttpResponse::Ok().json(json!({
        "configured": false
    }))),
  }
}

#[instrument(name = "handler::admin_update_payment_keys", skip_all)]
pub async fn update_payment_keys_handler(
  app_state: web::Data<AppState>,
  _session: AdminSession,
  payload: web::Json<UpdatePaymentKeysPayload>,
) -> Result<HttpResponse, AppError> {
  if payload.publishable_key.trim().is_empty() || payload.secret_key.trim().is_empty() {
    return Err(AppError::Validation("Both payment keys must be provided.".to_string()));
  }

  payment_keys::upsert_payment_keys(&app_state.db_pool, &payload.publishable_key, &payload.secret_key).await?;
  info!("Payment keys updated.");
  Ok(HttpResponse::Ok().json(json!({"message": "Payment keys updated."})))
}
