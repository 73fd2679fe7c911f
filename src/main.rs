// src/main.rs

use produtos_api::config::AppConfig;
use produtos_api::state::AppState;
use produtos_api::web;

use actix_cors::Cors;
use actix_web::{web as actix_data, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting produtos API server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // The pool is created lazily; the probe below is the single startup
  // connection attempt. Its failure does not stop the server: requests
  // keep surfacing storage errors until the database becomes reachable.
  let db_pool = PgPoolOptions::new().connect_lazy_with(app_config.pg_connect_options());
  match sqlx::query("SELECT 1").execute(&db_pool).await {
    Ok(_) => tracing::info!("Successfully connected to the database."),
    Err(e) => tracing::error!(error = %e, "Failed to connect to the database; serving anyway."),
  }

  // Create AppState
  let app_state = AppState {
    db_pool: db_pool.clone(),
    config: app_config.clone(),
  };

  // Configure and start the Actix Web server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .app_data(web::routes::json_config())
      .wrap(Cors::permissive())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
