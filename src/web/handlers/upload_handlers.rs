// src/web/handlers/upload_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::store_upload;
use crate::state::AppState;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
pub struct UploadQuery {
  /// Original client-side file name; only its extension survives into
  /// the stored key.
  pub filename: String,
}

#[instrument(
    name = "handler::upload_file",
    skip(app_state, path, query, body),
    fields(bucket = %path.as_ref(), filename = %query.filename, size = body.len())
)]
pub async fn upload_file_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  query: web::Query<UploadQuery>,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let bucket = path.into_inner();

  if body.is_empty() {
    return Err(AppError::Validation("Upload body cannot be empty.".to_string()));
  }

  let key = store_upload(app_state.object_store.as_ref(), &bucket, &query.filename, &body).await?;

  info!("Stored upload '{}' as '{}' in bucket '{}'.", query.filename, key, bucket);
  Ok(HttpResponse::Created().json(json!({
      "message": "File uploaded successfully.",
      "bucket": bucket,
      "path": key
  })))
}
