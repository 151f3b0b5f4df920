// src/services/link_service.rs

use async_trait::async_trait;
use tracing::{instrument, warn};

use crate::errors::AppError;

/// Shown when the slug is already claimed by another fundraiser.
pub const LINK_TAKEN_MESSAGE: &str = "This custom link is already taken. Please choose another one.";

/// Shown when the existence check itself could not be completed.
pub const LINK_CHECK_FAILED_MESSAGE: &str = "Error validating custom link. Please try again.";

/// The one question the validator asks of the external store. `PgPool`
/// implements this against the fundraisers table; tests substitute fakes.
#[async_trait]
pub trait CustomLinkIndex: Send + Sync {
  async fn custom_link_exists(&self, custom_link: &str) -> Result<bool, AppError>;
}

/// Outcome of a custom-link validation. Deliberately tri-state: a failed
/// check is not "taken", and neither failure carries an error up the call
/// stack; both surface as user-facing message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomLinkStatus {
  Available,
  Taken,
  CheckFailed,
}

impl CustomLinkStatus {
  pub fn is_available(&self) -> bool {
    matches!(self, CustomLinkStatus::Available)
  }

  /// The user-facing message for non-available outcomes.
  pub fn message(&self) -> Option<&'static str> {
    match self {
      CustomLinkStatus::Available => None,
      CustomLinkStatus::Taken => Some(LINK_TAKEN_MESSAGE),
      CustomLinkStatus::CheckFailed => Some(LINK_CHECK_FAILED_MESSAGE),
    }
  }
}

/// Checks whether `candidate` is free to claim. Exact, case-sensitive
/// match against stored links. The check and any subsequent insert are
/// not one transaction; the store's unique index is the final arbiter
/// when two creations race.
#[instrument(name = "link_service::validate_custom_link", skip(index))]
pub async fn validate_custom_link<S>(index: &S, candidate: &str) -> CustomLinkStatus
where
  S: CustomLinkIndex + ?Sized,
{
  match index.custom_link_exists(candidate).await {
    Ok(true) => CustomLinkStatus::Taken,
    Ok(false) => CustomLinkStatus::Available,
    Err(e) => {
      warn!(error = %e, custom_link = candidate, "Custom link existence check failed.");
      CustomLinkStatus::CheckFailed
    }
  }
}
