// tests/pricing_tests.rs

use causeforge::domain::pricing::SHIPPING_NOTE;
use causeforge::domain::{price_display, shipping_cost_for, DeliveryMethod, SHIPPING_SURCHARGE};

#[test]
fn total_renders_with_two_fixed_decimals() {
  let display = price_display(19.999, DeliveryMethod::Shipping);
  assert_eq!(display.total, "$20.00");
}

#[test]
fn shipping_adds_the_annotation() {
  let display = price_display(19.999, DeliveryMethod::Shipping);
  assert_eq!(display.shipping_note, Some(SHIPPING_NOTE));
  assert_eq!(display.shipping_note, Some("(+$5.00 shipping)"));
}

#[test]
fn pickup_has_no_annotation() {
  let display = price_display(19.999, DeliveryMethod::Pickup);
  assert_eq!(display.total, "$20.00");
  assert_eq!(display.shipping_note, None);
}

#[test]
fn display_never_folds_the_surcharge_into_the_total() {
  // The rendered total is the same for both delivery methods; the
  // surcharge is an upstream line item.
  let shipped = price_display(42.0, DeliveryMethod::Shipping);
  let picked_up = price_display(42.0, DeliveryMethod::Pickup);
  assert_eq!(shipped.total, picked_up.total);
}

#[test]
fn shipping_cost_line_matches_the_flat_surcharge() {
  assert_eq!(shipping_cost_for(DeliveryMethod::Shipping), SHIPPING_SURCHARGE);
  assert_eq!(shipping_cost_for(DeliveryMethod::Pickup), 0.0);
}

#[test]
fn exact_totals_render_unchanged() {
  assert_eq!(price_display(0.0, DeliveryMethod::Pickup).total, "$0.00");
  assert_eq!(price_display(12.5, DeliveryMethod::Pickup).total, "$12.50");
}
