// src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// One entry of a validation failure response: which rule was violated
/// and the message shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
  pub field: &'static str,
  pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0:?}")]
  Validation(Vec<ValidationFailure>),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(failures) => HttpResponse::BadRequest().json(json!({ "errors": failures })),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({ "message": m })),
      AppError::Config(m) => HttpResponse::InternalServerError().json(json!({ "error": m })),
      // Driver errors are passed through verbatim; the catch-all below is
      // the only path that withholds detail from the caller.
      AppError::Sqlx(e) => HttpResponse::InternalServerError().json(json!({ "error": e.to_string() })),
      AppError::Internal(_) => HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" })),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
