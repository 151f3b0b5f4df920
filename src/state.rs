// src/state.rs

use crate::config::AppConfig;
use crate::services::{AdminSessions, ObjectStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  pub object_store: Arc<dyn ObjectStore>,
  pub admin_sessions: AdminSessions,
  pub config: Arc<AppConfig>, // Share loaded config
}
