// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppError;

/// Fulfillment stages an order moves through, in production order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Received,
  Processed,
  Designed,
  Producing,
  Shipped,
  Delivered,
}

impl OrderStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Received => "received",
      OrderStatus::Processed => "processed",
      OrderStatus::Designed => "designed",
      OrderStatus::Producing => "producing",
      OrderStatus::Shipped => "shipped",
      OrderStatus::Delivered => "delivered",
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OrderStatus {
  type Err = AppError;

  /// Strings outside the closed set are rejected rather than defaulted;
  /// a row carrying one is surfaced to the operator, not shown as some
  /// arbitrary stage.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "received" => Ok(OrderStatus::Received),
      "processed" => Ok(OrderStatus::Processed),
      "designed" => Ok(OrderStatus::Designed),
      "producing" => Ok(OrderStatus::Producing),
      "shipped" => Ok(OrderStatus::Shipped),
      "delivered" => Ok(OrderStatus::Delivered),
      other => Err(AppError::Validation(format!("Unknown order status '{}'.", other))),
    }
  }
}

/// Customer shipping destination. Plain strings, no normalization; the
/// storefront and the store both use the `zipCode` casing on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
  pub address: String,
  pub city: String,
  pub state: String,
  #[serde(rename = "zipCode")]
  pub zip_code: String,
}

/// A customer order, as the application works with it.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
  pub id: Uuid,
  pub created_at: DateTime<Utc>,
  pub customer_email: String,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub product_name: String,
  pub total_amount: f64,
  pub status: OrderStatus,
  pub shipping_address: ShippingAddress,
  pub design_notes: Option<String>,
  pub cart_id: Option<Uuid>,
  pub image_path: Option<String>,
  pub price: f64,
  pub shipping_cost: f64,
  pub tax_amount: f64,
  pub stl_file_path: Option<String>,
  pub tracking_number: Option<String>,
}

impl Order {
  /// The total the line amounts imply.
  pub fn expected_total(&self) -> f64 {
    self.price + self.shipping_cost + self.tax_amount
  }

  /// Whether `total_amount` agrees with `price + shipping_cost + tax_amount`.
  /// Stored rows are not guaranteed to satisfy this; orders built by this
  /// service always do.
  pub fn totals_consistent(&self) -> bool {
    (self.total_amount - self.expected_total()).abs() < 0.005
  }
}

/// The store's raw row shape: free-form status string, untyped address
/// JSON. Must pass through `Order::try_from` before use.
#[derive(Debug, Clone, FromRow)]
pub struct RawOrder {
  pub id: Uuid,
  pub created_at: DateTime<Utc>,
  pub customer_email: String,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub product_name: String,
  pub total_amount: f64,
  pub status: String,
  pub shipping_address: serde_json::Value,
  pub design_notes: Option<String>,
  pub cart_id: Option<Uuid>,
  pub image_path: Option<String>,
  pub price: f64,
  pub shipping_cost: f64,
  pub tax_amount: f64,
  pub stl_file_path: Option<String>,
  pub tracking_number: Option<String>,
}

impl TryFrom<RawOrder> for Order {
  type Error = AppError;

  fn try_from(raw: RawOrder) -> Result<Self, Self::Error> {
    let status = OrderStatus::from_str(&raw.status)?;
    let shipping_address: ShippingAddress = serde_json::from_value(raw.shipping_address)
      .map_err(|e| AppError::Validation(format!("Order {} has a malformed shipping address: {}", raw.id, e)))?;

    Ok(Order {
      id: raw.id,
      created_at: raw.created_at,
      customer_email: raw.customer_email,
      first_name: raw.first_name,
      last_name: raw.last_name,
      product_name: raw.product_name,
      total_amount: raw.total_amount,
      status,
      shipping_address,
      design_notes: raw.design_notes,
      cart_id: raw.cart_id,
      image_path: raw.image_path,
      price: raw.price,
      shipping_cost: raw.shipping_cost,
      tax_amount: raw.tax_amount,
      stl_file_path: raw.stl_file_path,
      tracking_number: raw.tracking_number,
    })
  }
}
