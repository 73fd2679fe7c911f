// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, instrument, warn};

use crate::errors::{AppError, ValidationFailure};
use crate::models::product::Product;
use crate::state::AppState;

// --- Request DTOs ---

/// Candidate product fields as submitted by the caller. Every field is
/// optional at the deserialization boundary so that a missing field is
/// reported through the validation contract (one entry in the `errors`
/// array) rather than as a body-parse fault.
#[derive(Deserialize, Debug)]
pub struct ProductPayload {
  pub name: Option<String>,
  pub price: Option<f64>,
  pub quantity: Option<i32>,
}

/// A payload that passed every validation rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
  pub name: String,
  pub price: f64,
  pub quantity: i32,
}

impl ProductPayload {
  /// Applies the field rules shared by create and update. Every rule is
  /// checked; violations are reported together, in rule order, never
  /// short-circuited on the first failure.
  pub fn validate(&self) -> Result<ValidProduct, Vec<ValidationFailure>> {
    let mut failures = Vec::new();

    let name = match self.name.as_deref() {
      Some(name) if !name.is_empty() => Some(name.to_string()),
      _ => {
        failures.push(ValidationFailure {
          field: "name",
          message: "name is required and must not be empty",
        });
        None
      }
    };

    let price = match self.price {
      Some(price) if price > 0.0 => Some(price),
      _ => {
        failures.push(ValidationFailure {
          field: "price",
          message: "price must be a number greater than zero",
        });
        None
      }
    };

    let quantity = match self.quantity {
      Some(quantity) if quantity >= 0 => Some(quantity),
      _ => {
        failures.push(ValidationFailure {
          field: "quantity",
          message: "quantity must be an integer greater than or equal to zero",
        });
        None
      }
    };

    match (name, price, quantity) {
      (Some(name), Some(price), Some(quantity)) => Ok(ValidProduct { name, price, quantity }),
      _ => Err(failures),
    }
  }
}

// --- Handler Implementations ---

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  // Unconditional read; row order is whatever the storage engine returns.
  let products: Vec<Product> = sqlx::query_as("SELECT id, name, price, quantity FROM produtos")
    .fetch_all(&app_state.db_pool)
    .await
    .map_err(|e| {
      error!("Failed to fetch products from database: {}", e);
      AppError::Sqlx(e)
    })?;

  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let product_opt: Option<Product> = sqlx::query_as("SELECT id, name, price, quantity FROM produtos WHERE id = $1")
    .bind(product_id)
    .fetch_optional(&app_state.db_pool)
    .await
    .map_err(|e| {
      error!("Database error while fetching product {}: {}", product_id, e);
      AppError::Sqlx(e)
    })?;

  match product_opt {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound("Product not found".to_string()))
    }
  }
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  // Validation runs to completion before any storage call; a rejected
  // payload never reaches the database.
  let product = payload.validate().map_err(|failures| {
    warn!("Rejected product payload with {} validation failure(s).", failures.len());
    AppError::Validation(failures)
  })?;

  let id: i32 = sqlx::query_scalar("INSERT INTO produtos (name, price, quantity) VALUES ($1, $2, $3) RETURNING id")
    .bind(&product.name)
    .bind(product.price)
    .bind(product.quantity)
    .fetch_one(&app_state.db_pool)
    .await
    .map_err(|e| {
      error!("Failed to insert product: {}", e);
      AppError::Sqlx(e)
    })?;

  info!("Created product {} ('{}').", id, product.name);
  Ok(HttpResponse::Created().json(json!({
    "id": id,
    "name": product.name,
    "price": product.price,
    "quantity": product.quantity,
  })))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let product = payload.validate().map_err(|failures| {
    warn!("Rejected product payload with {} validation failure(s).", failures.len());
    AppError::Validation(failures)
  })?;

  // Full replacement of the three mutable fields in one statement.
  let result = sqlx::query("UPDATE produtos SET name = $1, price = $2, quantity = $3 WHERE id = $4")
    .bind(&product.name)
    .bind(product.price)
    .bind(product.quantity)
    .bind(product_id)
    .execute(&app_state.db_pool)
    .await
    .map_err(|e| {
      error!("Failed to update product {}: {}", product_id, e);
      AppError::Sqlx(e)
    })?;

  if result.rows_affected() == 0 {
    warn!("Product with ID {} not found for update.", product_id);
    return Err(AppError::NotFound("Product not found".to_string()));
  }

  info!("Updated product {}.", product_id);
  Ok(HttpResponse::Ok().json(json!({ "message": "Product updated successfully" })))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
    .bind(product_id)
    .execute(&app_state.db_pool)
    .await
    .map_err(|e| {
      error!("Failed to delete product {}: {}", product_id, e);
      AppError::Sqlx(e)
    })?;

  if result.rows_affected() == 0 {
    warn!("Product with ID {} not found for delete.", product_id);
    return Err(AppError::NotFound("Product not found".to_string()));
  }

  info!("Deleted product {}.", product_id);
  Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted successfully" })))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn payload(name: Option<&str>, price: Option<f64>, quantity: Option<i32>) -> ProductPayload {
    ProductPayload {
      name: name.map(str::to_string),
      price,
      quantity,
    }
  }

  #[test]
  fn valid_payload_passes_with_fields_preserved() {
    let valid = payload(Some("Widget"), Some(9.99), Some(5))
      .validate()
      .expect("payload should validate");
    assert_eq!(
      valid,
      ValidProduct {
        name: "Widget".to_string(),
        price: 9.99,
        quantity: 5,
      }
    );
  }

  #[test]
  fn all_rules_are_checked_and_reported_in_order() {
    let failures = payload(Some(""), Some(0.0), Some(-1))
      .validate()
      .expect_err("payload should be rejected");
    let fields: Vec<&str> = failures.iter().map(|f| f.field).collect();
    assert_eq!(fields, vec!["name", "price", "quantity"]);
  }

  #[test]
  fn missing_fields_are_reported_per_field() {
    let failures = ProductPayload {
      name: None,
      price: None,
      quantity: None,
    }
    .validate()
    .expect_err("payload should be rejected");
    assert_eq!(failures.len(), 3);
  }

  #[test]
  fn empty_name_is_rejected() {
    let failures = payload(Some(""), Some(1.0), Some(0))
      .validate()
      .expect_err("payload should be rejected");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].field, "name");
  }

  #[test]
  fn zero_and_negative_prices_are_rejected() {
    for price in [0.0, -0.01, -10.0] {
      let failures = payload(Some("Widget"), Some(price), Some(0))
        .validate()
        .expect_err("payload should be rejected");
      assert_eq!(failures.len(), 1);
      assert_eq!(failures[0].field, "price");
    }
  }

  #[test]
  fn smallest_positive_price_is_accepted() {
    assert!(payload(Some("Widget"), Some(0.01), Some(0)).validate().is_ok());
  }

  #[test]
  fn zero_quantity_is_accepted_and_negative_rejected() {
    assert!(payload(Some("Widget"), Some(1.0), Some(0)).validate().is_ok());

    let failures = payload(Some("Widget"), Some(1.0), Some(-1))
      .validate()
      .expect_err("payload should be rejected");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].field, "quantity");
  }
}
