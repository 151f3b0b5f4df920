// src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::db::{cart, orders};
use crate::domain::{shipping_cost_for, DeliveryMethod};
use crate::errors::AppError;
use crate::models::ShippingAddress;
use crate::state::AppState;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
pub struct CheckoutPayload {
  pub cart_id: Uuid,
  pub customer_email: String,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub delivery_method: DeliveryMethod,
  #[serde(default)]
  pub tax_amount: f64,
  pub shipping_address: ShippingAddress,
  pub design_notes: Option<String>,
  pub stl_file_path: Option<String>,
}

#[instrument(
    name = "handler::start_checkout",
    skip(app_state, payload),
    fields(cart_id = %payload.cart_id, customer_email = %payload.customer_email)
)]
pub async fn start_checkout_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CheckoutPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();

  if payload.customer_email.trim().is_empty() {
    return Err(AppError::Validation("Customer email cannot be empty.".to_string()));
  }
  if payload.tax_amount < 0.0 {
    return Err(AppError::Validation("Tax amount cannot be negative.".to_string()));
  }

  let items = cart::list_cart_items(&app_state.db_pool, payload.cart_id).await?;
  if items.is_empty() {
    warn!("Checkout attempted on empty cart {}.", payload.cart_id);
    return Err(AppError::Validation("Cart is empty.".to_string()));
  }

  let price: f64 = items.iter().map(|item| item.line_total()).sum();
  let shipping_cost = shipping_cost_for(payload.delivery_method);
  let total_amount = price + shipping_cost + payload.tax_amount;

  let product_name = items
    .iter()
    .map(|item| item.product_name.as_str())
    .collect::<Vec<_>>()
    .join(", ");
  let image_path = items.iter().find_map(|item| item.image_path.clone());

  let order = orders::insert_order(
    &app_state.db_pool,
    orders::NewOrder {
      customer_email: payload.customer_email,
      first_name: payload.first_name,
      last_name: payload.last_name,
      product_name,
      total_amount,
      shipping_address: payload.shipping_address,
      design_notes: payload.design_notes,
      cart_id: Some(payload.cart_id),
      image_path,
      price,
      shipping_cost,
      tax_amount: payload.tax_amount,
      stl_file_path: payload.stl_file_path,
    },
  )
  .await?;
  debug_assert!(order.totals_consistent());

  info!("Order {} created from cart {}.", order.id, payload.cart_id);
  Ok(HttpResponse::Created().json(json!({
      "message": "Order placed successfully.",
      "order": order
  })))
}

/// Landing data for the payment-success page: re-reads the order so the
/// page reflects what the store actually holds.
#[instrument(name = "handler::checkout_success", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn checkout_success_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();

  let order = orders::fetch_order(&app_state.db_pool, order_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Order {} not found.", order_id)))?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Payment completed. Thank you for your support!",
      "order": order
  })))
}

/// The cancel page is a pure acknowledgement; nothing is written and the
/// cart is left as it was.
#[instrument(name = "handler::checkout_cancel", skip(path), fields(order_id = %path.as_ref()))]
pub async fn checkout_cancel_handler(path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  info!("Checkout cancelled for order {}.", order_id);
  Ok(HttpResponse::Ok().json(json!({
      "message": "Checkout cancelled. Your cart has not been changed.",
      "orderId": order_id
  })))
}
