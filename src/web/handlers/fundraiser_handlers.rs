// src/web/handlers/fundraiser_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::db::fundraisers::{self, NewFundraiser};
use crate::domain::format_donation_text;
use crate::errors::AppError;
use crate::services::{validate_custom_link, CustomLinkStatus};
use crate::state::AppState;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
pub struct CreateFundraiserPayload {
  pub title: String,
  pub description: Option<String>,
  pub custom_link: String,
  pub base_price: f64,
  pub donation_type: String,
  #[serde(default)]
  pub donation_percentage: f64,
  pub donation_amount: Option<f64>,
}

#[instrument(
    name = "handler::create_fundraiser",
    skip(app_state, payload),
    fields(custom_link = %payload.custom_link)
)]
pub async fn create_fundraiser_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CreateFundraiserPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();

  if payload.title.trim().is_empty() {
    return Err(AppError::Validation("Fundraiser title cannot be empty.".to_string()));
  }
  if payload.custom_link.trim().is_empty() {
    return Err(AppError::Validation("Custom link cannot be empty.".to_string()));
  }
  if payload.base_price < 0.0 {
    return Err(AppError::Validation("Base price cannot be negative.".to_string()));
  }

  // Uniqueness check first; both non-available outcomes are message
  // strings to the client, not errors. The store's unique index still
  // backstops the race between two concurrent creations.
  match validate_custom_link(&app_state.db_pool, &payload.custom_link).await {
    CustomLinkStatus::Available => {}
    status @ CustomLinkStatus::Taken => {
      info!("Custom link '{}' already taken.", payload.custom_link);
      return Ok(HttpResponse::Conflict().json(json!({"error": status.message()})));
    }
    status @ CustomLinkStatus::CheckFailed => {
      warn!("Custom link check failed for '{}'.", payload.custom_link);
      return Ok(HttpResponse::ServiceUnavailable().json(json!({"error": status.message()})));
    }
  }

  let fundraiser = fundraisers::insert_fundraiser(
    &app_state.db_pool,
    NewFundraiser {
      title: payload.title,
      description: payload.description,
      custom_link: payload.custom_link,
      base_price: payload.base_price,
      donation_percentage: payload.donation_percentage,
      donation_type: payload.donation_type,
      donation_amount: payload.donation_amount,
    },
  )
  .await?;

  info!("Fundraiser '{}' created with id {}.", fundraiser.custom_link, fundraiser.id);
  Ok(HttpResponse::Created().json(json!({
      "message": "Fundraiser created successfully.",
      "fundraiser": fundraiser
  })))
}

#[instrument(name = "handler::list_fundraisers", skip(app_state))]
pub async fn list_fundraisers_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let all = fundraisers::list_fundraisers(&app_state.db_pool).await?;
  info!("Successfully fetched {} fundraisers.", all.len());
  Ok(HttpResponse::Ok().json(json!({
      "message": "Fundraisers fetched successfully.",
      "fundraisers": all
  })))
}

#[instrument(name = "handler::get_fundraiser", skip(app_state, path), fields(custom_link = %path.as_ref()))]
pub async fn get_fundraiser_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let custom_link = path.into_inner();

  let fundraiser = fundraisers::fetch_by_custom_link(&app_state.db_pool, &custom_link)
    .await?
    .ok_or_else(|| {
      warn!("Fundraiser '{}' not found.", custom_link);
      AppError::NotFound(format!("Fundraiser '{}' not found.", custom_link))
    })?;

  let donation_text = format_donation_text(Some(&fundraiser), None);
  Ok(HttpResponse::Ok().json(json!({
      "message": "Fundraiser fetched successfully.",
      "fundraiser": fundraiser,
      "donationText": donation_text
  })))
}

#[instrument(name = "handler::fundraiser_totals", skip(app_state, path), fields(fundraiser_id = %path.as_ref()))]
pub async fn fundraiser_totals_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let fundraiser_id = path.into_inner();
  let totals = fundraisers::fundraiser_totals(&app_state.db_pool, fundraiser_id).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Fundraiser totals fetched successfully.",
      "totals": totals
  })))
}
