// src/db/cart.rs

use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::CartItem;

/// Adds one item to a cart. Caller validates the quantity; the row id is
/// assigned here.
pub async fn add_cart_item(
  pool: &PgPool,
  cart_id: Uuid,
  product_name: &str,
  price: f64,
  quantity: i32,
  image_path: Option<&str>,
) -> Result<CartItem> {
  let item = CartItem {
    id: Uuid::new_v4(),
    product_name: product_name.to_string(),
    price,
    quantity,
    image_path: image_path.map(str::to_string),
    cart_id,
  };

  sqlx::query(
    "INSERT INTO cart_items (id, product_name, price, quantity, image_path, cart_id) VALUES ($1, $2, $3, $4, $5, $6)",
  )
  .bind(item.id)
  .bind(&item.product_name)
  .bind(item.price)
  .bind(item.quantity)
  .bind(&item.image_path)
  .bind(item.cart_id)
  .execute(pool)
  .await
  .map_err(|e| {
    error!("Failed to add item to cart {}: {}", cart_id, e);
    AppError::Sqlx(e)
  })?;

  Ok(item)
}

pub async fn list_cart_items(pool: &PgPool, cart_id: Uuid) -> Result<Vec<CartItem>> {
  sqlx::query_as("SELECT id, product_name, price, quantity, image_path, cart_id FROM cart_items WHERE cart_id = $1")
    .bind(cart_id)
    .fetch_all(pool)
    .await
    .map_err(|e| {
      error!("Failed to list items of cart {}: {}", cart_id, e);
      AppError::Sqlx(e)
    })
}

/// Removes one item from a cart; returns whether it was present.
pub async fn remove_cart_item(pool: &PgPool, cart_id: Uuid, item_id: Uuid) -> Result<bool> {
  let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND cart_id = $2")
    .bind(item_id)
    .bind(cart_id)
    .execute(pool)
    .await
    .map_err(|e| {
      error!("Failed to remove item {} from cart {}: {}", item_id, cart_id, e);
      AppError::Sqlx(e)
    })?;

  Ok(result.rows_affected() > 0)
}
