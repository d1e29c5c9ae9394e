//! Process configuration read from the environment.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Drop and recreate all tables before serving. Off unless `RESET_SCHEMA` is truthy.
    pub reset_schema: bool,
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load from process env. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    ///
    /// | Env Var              | Default                |
    /// |----------------------|------------------------|
    /// | `DATABASE_URL`       | `sqlite://database.db` |
    /// | `BIND_ADDR`          | `127.0.0.1:5000`       |
    /// | `DB_MAX_CONNECTIONS` | `5`                    |
    /// | `RESET_SCHEMA`       | `false`                |
    /// | `MAX_BODY_BYTES`     | `65536`                |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidValue {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "DB_MAX_CONNECTIONS",
                        value: v,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let reset_schema = match lookup("RESET_SCHEMA") {
            Some(v) => parse_flag(&v).ok_or(ConfigError::InvalidValue {
                var: "RESET_SCHEMA",
                value: v,
            })?,
            None => false,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
                var: "MAX_BODY_BYTES",
                value: v,
            })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            reset_schema,
            max_body_bytes,
        })
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
