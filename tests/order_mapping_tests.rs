// tests/order_mapping_tests.rs
mod common;

use std::str::FromStr;

use causeforge::models::{Order, OrderStatus};
use common::*;

#[test]
fn received_raw_order_maps_with_all_fields_preserved() {
  let raw = raw_order("received");
  let raw_id = raw.id;

  let order = Order::try_from(raw).expect("a valid row must map");

  assert_eq!(order.id, raw_id);
  assert_eq!(order.status, OrderStatus::Received);
  assert_eq!(order.customer_email, "buyer@example.com");
  assert_eq!(order.first_name.as_deref(), Some("Ada"));
  assert_eq!(order.last_name.as_deref(), Some("Lovelace"));
  assert_eq!(order.product_name, "Custom Phone Stand");
  assert_eq!(order.total_amount, 32.5);
  assert_eq!(order.price, 25.0);
  assert_eq!(order.shipping_cost, 5.0);
  assert_eq!(order.tax_amount, 2.5);
  assert_eq!(order.shipping_address.address, "123 Print Lane");
  assert_eq!(order.shipping_address.city, "Springfield");
  assert_eq!(order.shipping_address.state, "IL");
  assert_eq!(order.shipping_address.zip_code, "62704");
  assert_eq!(order.design_notes.as_deref(), Some("Engrave initials"));
  assert!(order.tracking_number.is_none());
}

#[test]
fn every_known_status_string_maps_through() {
  for status in ["received", "processed", "designed", "producing", "shipped", "delivered"] {
    let order = Order::try_from(raw_order(status)).expect("known status must map");
    assert_eq!(order.status.as_str(), status);
  }
}

#[test]
fn unknown_status_string_is_rejected_not_defaulted() {
  let raw = raw_order("teleported");
  let err = Order::try_from(raw).expect_err("unknown status must be rejected");
  assert!(err.to_string().contains("teleported"));
}

#[test]
fn malformed_shipping_address_is_rejected() {
  let mut raw = raw_order("received");
  raw.shipping_address = serde_json::json!({"street": "missing the expected fields"});
  assert!(Order::try_from(raw).is_err());
}

#[test]
fn status_parse_round_trips_through_as_str() {
  for status in [
    OrderStatus::Received,
    OrderStatus::Processed,
    OrderStatus::Designed,
    OrderStatus::Producing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
  ] {
    assert_eq!(OrderStatus::from_str(status.as_str()).unwrap(), status);
  }
  assert!(OrderStatus::from_str("Received").is_err(), "matching is case-sensitive");
}

#[test]
fn total_amount_agrees_with_its_component_sum() {
  let order = Order::try_from(raw_order("received")).unwrap();
  // 25.00 + 5.00 + 2.50 == 32.50 as stored.
  assert!(order.totals_consistent());
}

#[test]
fn drifted_total_amount_is_flagged() {
  let mut raw = raw_order("received");
  raw.total_amount = 99.0;
  let order = Order::try_from(raw).unwrap();
  assert!(!order.totals_consistent());
  assert_eq!(order.expected_total(), 32.5);
}
