// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use sqlx::postgres::PgConnectOptions;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub db_host: String,
  pub db_port: u16,
  pub db_user: String,
  pub db_pass: String,
  pub db_name: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "3000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let db_host = get_env("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let db_port = get_env("DB_PORT")
      .unwrap_or_else(|_| "5432".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid DB_PORT: {}", e)))?;
    let db_user = get_env("DB_USER")?;
    let db_pass = get_env("DB_PASS")?;
    let db_name = get_env("DB_NAME")?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      db_host,
      db_port,
      db_user,
      db_pass,
      db_name,
    })
  }

  /// Connection options for the produtos database.
  pub fn pg_connect_options(&self) -> PgConnectOptions {
    PgConnectOptions::new()
      .host(&self.db_host)
      .port(self.db_port)
      .username(&self.db_user)
      .password(&self.db_pass)
      .database(&self.db_name)
  }
}
