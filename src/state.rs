// src/state.rs
use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;

/// Process-scoped state shared with every handler. The pool is created
/// once at startup and lives for the life of the process.
#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  pub config: Arc<AppConfig>,
}
