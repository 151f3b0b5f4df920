// tests/donation_format_tests.rs
mod common;

use causeforge::domain::format_donation_text;
use causeforge::models::FundraiserTotals;
use common::*;

#[test]
fn missing_fundraiser_formats_to_empty_string() {
  assert_eq!(format_donation_text(None, None), "");
}

#[test]
fn percentage_donation_uses_raw_numeric_value() {
  let fundraiser = fundraiser_with_donation("percentage", 10.0, None, "X");
  assert_eq!(
    format_donation_text(Some(&fundraiser), None),
    "10% of each item purchase (excluding shipping) is donated to X"
  );
}

#[test]
fn fractional_percentage_keeps_its_fraction() {
  let fundraiser = fundraiser_with_donation("percentage", 12.5, None, "Robotics Club");
  assert_eq!(
    format_donation_text(Some(&fundraiser), None),
    "12.5% of each item purchase (excluding shipping) is donated to Robotics Club"
  );
}

#[test]
fn fixed_donation_formats_amount_to_two_decimals() {
  let fundraiser = fundraiser_with_donation("fixed", 0.0, Some(2.5), "Y");
  assert_eq!(
    format_donation_text(Some(&fundraiser), None),
    "$2.50 of each item bought is donated to Y"
  );
}

#[test]
fn fixed_donation_defaults_missing_amount_to_zero() {
  let fundraiser = fundraiser_with_donation("fixed", 0.0, None, "Z");
  assert_eq!(
    format_donation_text(Some(&fundraiser), None),
    "$0.00 of each item bought is donated to Z"
  );
}

#[test]
fn unrecognized_donation_type_falls_back_to_fixed_wording() {
  let fundraiser = fundraiser_with_donation("per_item", 40.0, Some(1.0), "Band Trip");
  assert_eq!(
    format_donation_text(Some(&fundraiser), None),
    "$1.00 of each item bought is donated to Band Trip"
  );
}

#[test]
fn totals_argument_does_not_change_the_blurb() {
  let fundraiser = fundraiser_with_donation("percentage", 10.0, None, "X");
  let totals = FundraiserTotals {
    items_sold: 12,
    gross_sales: 300.0,
    donation_total: 30.0,
  };
  assert_eq!(
    format_donation_text(Some(&fundraiser), Some(&totals)),
    format_donation_text(Some(&fundraiser), None)
  );
}
