// src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::db::cart;
use crate::domain::{price_display, DeliveryMethod};
use crate::errors::AppError;
use crate::state::AppState;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct AddCartItemPayload {
  /// Absent on the first add; the server mints the cart id.
  pub cart_id: Option<Uuid>,
  pub product_name: String,
  pub price: f64,
  pub quantity: i32,
  pub image_path: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ViewCartQuery {
  pub delivery_method: Option<DeliveryMethod>,
}

#[instrument(
    name = "handler::add_cart_item",
    skip(app_state, payload),
    fields(product_name = %payload.product_name, quantity = payload.quantity)
)]
pub async fn add_cart_item_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AddCartItemPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();

  if payload.quantity < 1 {
    warn!("Rejected cart add with non-positive quantity {}.", payload.quantity);
    return Err(AppError::Validation("Quantity must be a positive integer.".to_string()));
  }
  if payload.price < 0.0 {
    return Err(AppError::Validation("Price cannot be negative.".to_string()));
  }

  let cart_id = payload.cart_id.unwrap_or_else(Uuid::new_v4);
  let item = cart::add_cart_item(
    &app_state.db_pool,
    cart_id,
    &payload.product_name,
    payload.price,
    payload.quantity,
    payload.image_path.as_deref(),
  )
  .await?;

  info!("Added item {} to cart {}.", item.id, cart_id);
  Ok(HttpResponse::Created().json(json!({
      "message": "Item added to cart successfully.",
      "cartId": cart_id,
      "cartItem": item
  })))
}

#[instrument(name = "handler::view_cart", skip(app_state, path, query), fields(cart_id = %path.as_ref()))]
pub async fn view_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  query: web::Query<ViewCartQuery>,
) -> Result<HttpResponse, AppError> {
  let cart_id = path.into_inner();
  let delivery_method = query.delivery_method.unwrap_or(DeliveryMethod::Pickup);

  let items = cart::list_cart_items(&app_state.db_pool, cart_id).await?;
  let subtotal: f64 = items.iter().map(|item| item.line_total()).sum();
  let display = price_display(subtotal, delivery_method);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart fetched successfully.",
      "cartId": cart_id,
      "items": items,
      "itemCount": items.len(),
      "subtotal": subtotal,
      "display": display
  })))
}

#[instrument(name = "handler::remove_cart_item", skip(app_state, path))]
pub async fn remove_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, AppError> {
  let (cart_id, item_id) = path.into_inner();

  let removed = cart::remove_cart_item(&app_state.db_pool, cart_id, item_id).await?;
  if !removed {
    return Err(AppError::NotFound(format!(
      "Item {} not found in cart {}.",
      item_id, cart_id
    )));
  }

  info!("Removed item {} from cart {}.", item_id, cart_id);
  Ok(HttpResponse::Ok().json(json!({"message": "Item removed from cart."})))
}
