// src/db/orders.rs

use chrono::Utc;
use sqlx::PgPool;
use tracing::{error, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{Order, OrderStatus, RawOrder, ShippingAddress};

/// Insert-shaped order; id, timestamp, and the `received` status are
/// assigned here. `total_amount` is taken as given; checkout computes it
/// as `price + shipping_cost + tax_amount` and asserts as much.
#[derive(Debug, Clone)]
pub struct NewOrder {
  pub customer_email: String,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub product_name: String,
  pub total_amount: f64,
  pub shipping_address: ShippingAddress,
  pub design_notes: Option<String>,
  pub cart_id: Option<Uuid>,
  pub image_path: Option<String>,
  pub price: f64,
  pub shipping_cost: f64,
  pub tax_amount: f64,
  pub stl_file_path: Option<String>,
}

pub async fn insert_order(pool: &PgPool, new: NewOrder) -> Result<Order> {
  let order = Order {
    id: Uuid::new_v4(),
    created_at: Utc::now(),
    customer_email: new.customer_email,
    first_name: new.first_name,
    last_name: new.last_name,
    product_name: new.product_name,
    total_amount: new.total_amount,
    status: OrderStatus::Received,
    shipping_address: new.shipping_address,
    design_notes: new.design_notes,
    cart_id: new.cart_id,
    image_path: new.image_path,
    price: new.price,
    shipping_cost: new.shipping_cost,
    tax_amount: new.tax_amount,
    stl_file_path: new.stl_file_path,
    tracking_number: None,
  };

  let address_json = serde_json::to_value(&order.shipping_address)
    .map_err(|e| AppError::Internal(format!("Failed to serialize shipping address: {}", e)))?;

  sqlx::query(
    "INSERT INTO orders \
       (id, created_at, customer_email, first_name, last_name, product_name, total_amount, status, \
        shipping_address, design_notes, cart_id, image_path, price, shipping_cost, tax_amount, stl_file_path) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)",
  )
  .bind(order.id)
  .bind(order.created_at)
  .bind(&order.customer_email)
  .bind(&order.first_name)
  .bind(&order.last_name)
  .bind(&order.product_name)
  .bind(order.total_amount)
  .bind(order.status.as_str())
  .bind(address_json)
  .bind(&order.design_notes)
  .bind(order.cart_id)
  .bind(&order.image_path)
  .bind(order.price)
  .bind(order.shipping_cost)
  .bind(order.tax_amount)
  .bind(&order.stl_file_path)
  .execute(pool)
  .await
  .map_err(|e| {
    error!("Failed to insert order for {}: {}", order.customer_email, e);
    AppError::Sqlx(e)
  })?;

  Ok(order)
}

const ORDER_COLUMNS: &str = "id, created_at, customer_email, first_name, last_name, product_name, total_amount, \
   status, shipping_address, design_notes, cart_id, image_path, price, shipping_cost, tax_amount, \
   stl_file_path, tracking_number";

/// All orders, newest first. Rows that fail the raw-to-normalized mapping
/// (unknown status, malformed address) are skipped with a warning; the
/// skipped count is returned so the admin view can say so instead of
/// silently shortening the list.
pub async fn list_orders(pool: &PgPool) -> Result<(Vec<Order>, usize)> {
  let raw_rows: Vec<RawOrder> = sqlx::query_as(&format!("SELECT {} FROM orders ORDER BY created_at DESC", ORDER_COLUMNS))
    .fetch_all(pool)
    .await
    .map_err(|e| {
      error!("Failed to list orders: {}", e);
      AppError::Sqlx(e)
    })?;

  let mut orders = Vec::with_capacity(raw_rows.len());
  let mut skipped = 0usize;
  for raw in raw_rows {
    let id = raw.id;
    match Order::try_from(raw) {
      Ok(order) => orders.push(order),
      Err(e) => {
        warn!(order_id = %id, error = %e, "Skipping order row that failed validation.");
        skipped += 1;
      }
    }
  }
  Ok((orders, skipped))
}

/// Fetches one order. A row that exists but fails validation is an error
/// here, not a skip, since the caller asked for this specific order.
pub async fn fetch_order(pool: &PgPool, order_id: Uuid) -> Result<Option<Order>> {
  let raw: Option<RawOrder> = sqlx::query_as(&format!("SELECT {} FROM orders WHERE id = $1", ORDER_COLUMNS))
    .bind(order_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
      error!("Failed to fetch order {}: {}", order_id, e);
      AppError::Sqlx(e)
    })?;

  raw.map(Order::try_from).transpose()
}

/// Moves an order to `status`, optionally attaching a tracking number
/// (typically alongside `shipped`). Returns whether a row was touched.
pub async fn update_order_status(
  pool: &PgPool,
  order_id: Uuid,
  status: OrderStatus,
  tracking_number: Option<&str>,
) -> Result<bool> {
  let result = sqlx::query("UPDATE orders SET status = $2, tracking_number = COALESCE($3, tracking_number) WHERE id = $1")
    .bind(order_id)
    .bind(status.as_str())
    .bind(tracking_number)
    .execute(pool)
    .await
    .map_err(|e| {
      error!("Failed to update status of order {}: {}", order_id, e);
      AppError::Sqlx(e)
    })?;

  Ok(result.rows_affected() > 0)
}
