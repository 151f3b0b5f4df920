// tests/link_validation_tests.rs
mod common;

use causeforge::services::link_service::{LINK_CHECK_FAILED_MESSAGE, LINK_TAKEN_MESSAGE};
use causeforge::services::{validate_custom_link, CustomLinkStatus};
use common::*;

#[tokio::test]
async fn existing_slug_reports_taken_with_the_exact_message() {
  setup_tracing();
  let index = StaticLinkIndex { taken: true };

  let status = validate_custom_link(&index, "team-robotics").await;

  assert_eq!(status, CustomLinkStatus::Taken);
  assert!(!status.is_available());
  assert_eq!(
    status.message(),
    Some("This custom link is already taken. Please choose another one.")
  );
  assert_eq!(status.message(), Some(LINK_TAKEN_MESSAGE));
}

#[tokio::test]
async fn store_error_reports_the_generic_failure_message() {
  setup_tracing();
  let index = FailingLinkIndex;

  let status = validate_custom_link(&index, "team-robotics").await;

  assert_eq!(status, CustomLinkStatus::CheckFailed);
  assert!(!status.is_available());
  assert_eq!(status.message(), Some("Error validating custom link. Please try again."));
  assert_eq!(status.message(), Some(LINK_CHECK_FAILED_MESSAGE));
}

#[tokio::test]
async fn unclaimed_slug_is_available_with_no_message() {
  setup_tracing();
  let index = StaticLinkIndex { taken: false };

  let status = validate_custom_link(&index, "team-robotics").await;

  assert_eq!(status, CustomLinkStatus::Available);
  assert!(status.is_available());
  assert_eq!(status.message(), None);
}
