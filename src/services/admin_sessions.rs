// src/services/admin_sessions.rs

use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Ephemeral admin session tokens. Lives only in process memory and is
/// lost on restart; this mirrors the storefront's session-storage gate
/// and is not a durable security boundary.
#[derive(Clone, Default)]
pub struct AdminSessions {
  tokens: Arc<RwLock<HashSet<String>>>,
}

impl AdminSessions {
  pub fn new() -> Self {
    Self::default()
  }

  /// Issues a fresh session token.
  pub fn issue(&self) -> String {
    let token = Uuid::new_v4().simple().to_string();
    self.tokens.write().insert(token.clone());
    token
  }

  pub fn is_valid(&self, token: &str) -> bool {
    self.tokens.read().contains(token)
  }

  /// Returns whether the token was actually present.
  pub fn revoke(&self, token: &str) -> bool {
    self.tokens.write().remove(token)
  }
}
