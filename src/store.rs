//! SQLite pool construction. Foreign keys are switched on for every connection
//! so `humans_in_movies` references are enforced by the store.

use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|_| ConfigError::InvalidValue {
            var: "DATABASE_URL",
            value: database_url.to_string(),
        })?
        .create_if_missing(true)
        .foreign_keys(true);
    Ok(opts)
}

/// Open a pool against `database_url`, creating the database file if it does not exist.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = connect_options(database_url)?;
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await?;
    tracing::debug!(database_url, max_connections, "database pool ready");
    Ok(pool)
}

/// Private in-memory database on a single long-lived connection. Every pooled
/// connection to `sqlite::memory:` would otherwise see its own empty database.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let opts = connect_options("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(opts)
        .await?;
    Ok(pool)
}
