// src/models/cart_item.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
  pub id: Uuid,
  pub product_name: String,
  pub price: f64,
  /// Positive integer; enforced on insert, not re-checked on read.
  pub quantity: i32,
  pub image_path: Option<String>,
  /// Groups items into one cart.
  pub cart_id: Uuid,
}

impl CartItem {
  /// Line total for this cart row.
  pub fn line_total(&self) -> f64 {
    self.price * self.quantity as f64
  }
}
