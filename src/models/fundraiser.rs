// src/models/fundraiser.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An affiliate fundraiser campaign: a product sold under a custom link,
/// with a cut of each sale donated to the named cause.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fundraiser {
  pub id: Uuid,
  pub created_at: DateTime<Utc>,
  pub title: String,
  pub description: Option<String>,
  /// Human-chosen URL slug, unique across all fundraisers.
  pub custom_link: String,
  pub base_price: f64,
  pub donation_percentage: f64,
  /// Raw value as stored; interpret through [`DonationType::from_raw`].
  pub donation_type: String,
  pub donation_amount: Option<f64>,
  pub status: String,
}

/// How a fundraiser's donation is computed per item sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationType {
  Percentage,
  Fixed,
}

impl DonationType {
  /// Interprets the stored `donation_type` column. Anything other than
  /// `"percentage"` is treated as a fixed amount, matching how the
  /// storefront has always rendered unrecognized values.
  pub fn from_raw(raw: &str) -> Self {
    if raw == "percentage" {
      DonationType::Percentage
    } else {
      DonationType::Fixed
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      DonationType::Percentage => "percentage",
      DonationType::Fixed => "fixed",
    }
  }
}

impl Fundraiser {
  pub fn donation_type(&self) -> DonationType {
    DonationType::from_raw(&self.donation_type)
  }
}

/// Aggregate totals for one fundraiser, as returned by the store's
/// `calculate_fundraiser_totals` routine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct FundraiserTotals {
  pub items_sold: i64,
  pub gross_sales: f64,
  pub donation_total: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn percentage_string_parses_to_percentage() {
    assert_eq!(DonationType::from_raw("percentage"), DonationType::Percentage);
  }

  #[test]
  fn fixed_and_unrecognized_strings_parse_to_fixed() {
    assert_eq!(DonationType::from_raw("fixed"), DonationType::Fixed);
    assert_eq!(DonationType::from_raw(""), DonationType::Fixed);
    assert_eq!(DonationType::from_raw("per_item"), DonationType::Fixed);
  }
}
