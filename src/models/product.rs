// src/models/product.rs

use serde::Serialize;
use sqlx::FromRow;

/// A persisted product row. `id` is assigned by the database and never
/// changes; the remaining fields are replaced wholesale on update.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: i32,
  pub name: String,
  pub price: f64,
  pub quantity: i32,
}
