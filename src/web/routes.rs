// src/web/routes.rs

use actix_web::{error::InternalError, web, HttpResponse};
use serde_json::json;

use super::handlers::product_handlers;

/// Static liveness answer. Deliberately touches no other resource: a
/// reachable process answers ok even when the database is down.
async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// JSON 404 for any route the table below does not know.
async fn fallback_handler() -> HttpResponse {
  HttpResponse::NotFound().json(json!({ "message": "Resource not found" }))
}

/// JSON extractor settings: request bodies are capped at 1 MiB, and
/// body faults (malformed JSON, wrong types, oversized payloads) are
/// answered as JSON instead of the framework's plain-text default.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().limit(1024 * 1024).error_handler(|err, _req| {
    let detail = err.to_string();
    InternalError::from_response(err, HttpResponse::BadRequest().json(json!({ "error": detail }))).into()
  })
}

// This function is called in `main.rs` (and by the integration tests) to
// configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/produtos")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("/{product_id}", web::get().to(product_handlers::get_product_handler))
        .route("/{product_id}", web::put().to(product_handlers::update_product_handler))
        .route("/{product_id}", web::delete().to(product_handlers::delete_product_handler)),
    )
    .default_service(web::route().to(fallback_handler));
}
