// src/web/extractors.rs

use actix_web::{web, FromRequest, HttpRequest};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// Proof that the request carries a live admin session token. Handlers
/// behind the admin gate take this as a parameter; extraction fails the
/// request with 401 before the handler body runs.
#[derive(Debug)]
pub struct AdminSession {
  pub token: String,
}

impl FromRequest for AdminSession {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    if let Some(header) = req.headers().get("X-Admin-Token") {
      if let Ok(token) = header.to_str() {
        if let Some(state) = req.app_data::<web::Data<AppState>>() {
          if state.admin_sessions.is_valid(token) {
            return futures_util::future::ready(Ok(AdminSession {
              token: token.to_string(),
            }));
          }
        }
      }
    }

    warn!("AdminSession extractor: missing or invalid X-Admin-Token header.");
    futures_util::future::ready(Err(AppError::Auth(
      "Admin session required. Missing or invalid X-Admin-Token header.".to_string(),
    )))
  }
}
