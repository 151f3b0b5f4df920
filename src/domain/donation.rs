// src/domain/donation.rs

use crate::models::{DonationType, Fundraiser, FundraiserTotals};

/// Builds the human-readable donation blurb shown on a fundraiser page.
///
/// A percentage-type fundraiser renders its raw percentage value (`10`
/// rather than `10.00`); everything else renders as a fixed dollar amount
/// per item, defaulting to $0.00 when no amount is configured.
///
/// `_totals` is accepted so call sites already holding the aggregate can
/// pass it along; the blurb does not use it yet.
pub fn format_donation_text(fundraiser: Option<&Fundraiser>, _totals: Option<&FundraiserTotals>) -> String {
  let Some(fundraiser) = fundraiser else {
    return String::new();
  };

  match fundraiser.donation_type() {
    DonationType::Percentage => format!(
      "{}% of each item purchase (excluding shipping) is donated to {}",
      fundraiser.donation_percentage, fundraiser.title
    ),
    DonationType::Fixed => format!(
      "${:.2} of each item bought is donated to {}",
      fundraiser.donation_amount.unwrap_or(0.0),
      fundraiser.title
    ),
  }
}
