// src/db/fundraisers.rs

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{Fundraiser, FundraiserTotals};
use crate::services::link_service::CustomLinkIndex;

/// Insert-shaped fundraiser record; id and timestamp are assigned here.
#[derive(Debug, Clone)]
pub struct NewFundraiser {
  pub title: String,
  pub description: Option<String>,
  pub custom_link: String,
  pub base_price: f64,
  pub donation_percentage: f64,
  pub donation_type: String,
  pub donation_amount: Option<f64>,
}

pub async fn insert_fundraiser(pool: &PgPool, new: NewFundraiser) -> Result<Fundraiser> {
  let fundraiser = Fundraiser {
    id: Uuid::new_v4(),
    created_at: Utc::now(),
    title: new.title,
    description: new.description,
    custom_link: new.custom_link,
    base_price: new.base_price,
    donation_percentage: new.donation_percentage,
    donation_type: new.donation_type,
    donation_amount: new.donation_amount,
    status: "active".to_string(),
  };

  sqlx::query(
    "INSERT INTO fundraisers \
       (id, created_at, title, description, custom_link, base_price, donation_percentage, donation_type, donation_amount, status) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
  )
  .bind(fundraiser.id)
  .bind(fundraiser.created_at)
  .bind(&fundraiser.title)
  .bind(&fundraiser.description)
  .bind(&fundraiser.custom_link)
  .bind(fundraiser.base_price)
  .bind(fundraiser.donation_percentage)
  .bind(&fundraiser.donation_type)
  .bind(fundraiser.donation_amount)
  .bind(&fundraiser.status)
  .execute(pool)
  .await
  .map_err(|e| {
    error!("Failed to insert fundraiser '{}': {}", fundraiser.custom_link, e);
    AppError::Sqlx(e)
  })?;

  Ok(fundraiser)
}

pub async fn list_fundraisers(pool: &PgPool) -> Result<Vec<Fundraiser>> {
  sqlx::query_as(
    "SELECT id, created_at, title, description, custom_link, base_price, donation_percentage, donation_type, donation_amount, status \
     FROM fundraisers ORDER BY created_at DESC",
  )
  .fetch_all(pool)
  .await
  .map_err(|e| {
    error!("Failed to list fundraisers: {}", e);
    AppError::Sqlx(e)
  })
}

pub async fn fetch_by_custom_link(pool: &PgPool, custom_link: &str) -> Result<Option<Fundraiser>> {
  sqlx::query_as(
    "SELECT id, created_at, title, description, custom_link, base_price, donation_percentage, donation_type, donation_amount, status \
     FROM fundraisers WHERE custom_link = $1",
  )
  .bind(custom_link)
  .fetch_optional(pool)
  .await
  .map_err(|e| {
    error!("Failed to fetch fundraiser '{}': {}", custom_link, e);
    AppError::Sqlx(e)
  })
}

/// Aggregate totals, computed store-side by `calculate_fundraiser_totals`.
pub async fn fundraiser_totals(pool: &PgPool, fundraiser_id: Uuid) -> Result<FundraiserTotals> {
  sqlx::query_as("SELECT items_sold, gross_sales, donation_total FROM calculate_fundraiser_totals($1)")
    .bind(fundraiser_id)
    .fetch_one(pool)
    .await
    .map_err(|e| {
      error!("Totals call failed for fundraiser {}: {}", fundraiser_id, e);
      AppError::Sqlx(e)
    })
}

// The slug-uniqueness check the link validator runs before every insert.
#[async_trait]
impl CustomLinkIndex for PgPool {
  async fn custom_link_exists(&self, custom_link: &str) -> Result<bool> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM fundraisers WHERE custom_link = $1)")
      .bind(custom_link)
      .fetch_one(self)
      .await
      .map_err(AppError::Sqlx)
  }
}
