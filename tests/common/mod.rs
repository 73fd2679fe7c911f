// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use produtos_api::config::AppConfig;
use produtos_api::state::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Configuration pointing at a port nothing listens on. Paths that reach
/// the storage layer fail; validation and routing paths never get there.
pub fn unreachable_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    db_host: "127.0.0.1".to_string(),
    db_port: 1,
    db_user: "produtos".to_string(),
    db_pass: "secret".to_string(),
    db_name: "produtos_db".to_string(),
  }
}

/// AppState whose pool can never hand out a connection. The short acquire
/// timeout keeps storage-failure tests fast.
pub fn unreachable_app_state() -> AppState {
  let config = Arc::new(unreachable_config());
  let db_pool = PgPoolOptions::new()
    .acquire_timeout(Duration::from_secs(1))
    .connect_lazy_with(config.pg_connect_options());
  AppState { db_pool, config }
}
