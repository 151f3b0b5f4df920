// src/db/payment_keys.rs

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;

use crate::errors::{AppError, Result};

/// The Stripe key pair the admin panel manages. A single row in the
/// store; the secret key is never echoed back in full by the API.
#[derive(Debug, Clone, FromRow)]
pub struct PaymentKeys {
  pub publishable_key: String,
  pub secret_key: String,
  pub updated_at: DateTime<Utc>,
}

impl PaymentKeys {
  /// Masked rendering of the secret key for admin display: last four
  /// characters only.
  pub fn masked_secret(&self) -> String {
    let tail: String = self
      .secret_key
      .chars()
      .rev()
      .take(4)
      .collect::<Vec<_>>()
      .into_iter()
      .rev()
      .collect();
    format!("****{}", tail)
  }
}

pub async fn fetch_payment_keys(pool: &PgPool) -> Result<Option<PaymentKeys>> {
  sqlx::query_as("SELECT publishable_key, secret_key, updated_at FROM payment_keys WHERE id = 1")
    .fetch_optional(pool)
    .await
    .map_err(|e| {
      error!("Failed to fetch payment keys: {}", e);
      AppError::Sqlx(e)
    })
}

pub async fn upsert_payment_keys(pool: &PgPool, publishable_key: &str, secret_key: &str) -> Result<()> {
  sqlx::query(
    "INSERT INTO payment_keys (id, publishable_key, secret_key, updated_at) VALUES (1, $1, $2, NOW()) \
     ON CONFLICT (id) DO UPDATE SET publishable_key = $1, secret_key = $2, updated_at = NOW()",
  )
  .bind(publishable_key)
  .bind(secret_key)
  .execute(pool)
  .await
  .map_err(|e| {
    error!("Failed to update payment keys: {}", e);
    AppError::Sqlx(e)
  })?;

  Ok(())
}
