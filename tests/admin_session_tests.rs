// tests/admin_session_tests.rs

use causeforge::services::auth_service::{hash_password, verify_password};
use causeforge::services::AdminSessions;

#[test]
fn issued_token_is_valid_until_revoked() {
  let sessions = AdminSessions::new();

  let token = sessions.issue();
  assert!(sessions.is_valid(&token));

  assert!(sessions.revoke(&token));
  assert!(!sessions.is_valid(&token));
  assert!(!sessions.revoke(&token), "second revoke finds nothing");
}

#[test]
fn unknown_token_is_not_valid() {
  let sessions = AdminSessions::new();
  assert!(!sessions.is_valid("not-a-token"));
}

#[test]
fn tokens_are_distinct_per_issue() {
  let sessions = AdminSessions::new();
  assert_ne!(sessions.issue(), sessions.issue());
}

#[test]
fn password_hash_verifies_only_the_original_password() {
  let hash = hash_password("hunter2-but-longer").expect("hashing succeeds");

  assert!(verify_password(&hash, "hunter2-but-longer").unwrap());
  assert!(!verify_password(&hash, "something else").unwrap());
}

#[test]
fn empty_password_is_rejected_for_hashing() {
  assert!(hash_password("").is_err());
}

#[test]
fn garbage_stored_hash_is_an_error_not_a_mismatch() {
  assert!(verify_password("not-an-argon2-hash", "whatever").is_err());
}
