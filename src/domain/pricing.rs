// src/domain/pricing.rs

use serde::{Deserialize, Serialize};

/// Flat surcharge applied to shipped orders.
pub const SHIPPING_SURCHARGE: f64 = 5.00;

/// Annotation shown next to a total when the order ships.
pub const SHIPPING_NOTE: &str = "(+$5.00 shipping)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
  Shipping,
  Pickup,
}

/// What the storefront renders for a cart or order total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceDisplay {
  /// `"$<total to two decimals>"`.
  pub total: String,
  /// Present only for shipped orders. Purely presentational: the
  /// surcharge is folded into totals by [`shipping_cost_for`] at
  /// checkout, never by this function.
  pub shipping_note: Option<&'static str>,
}

/// Renders a total for display. Does not alter `total_price`; whether the
/// shipping surcharge is included is the caller's concern.
pub fn price_display(total_price: f64, delivery_method: DeliveryMethod) -> PriceDisplay {
  PriceDisplay {
    total: format!("${:.2}", total_price),
    shipping_note: match delivery_method {
      DeliveryMethod::Shipping => Some(SHIPPING_NOTE),
      DeliveryMethod::Pickup => None,
    },
  }
}

/// The shipping line an order of the given delivery method carries.
pub fn shipping_cost_for(delivery_method: DeliveryMethod) -> f64 {
  match delivery_method {
    DeliveryMethod::Shipping => SHIPPING_SURCHARGE,
    DeliveryMethod::Pickup => 0.0,
  }
}
