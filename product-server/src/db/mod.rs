//! Database Module
//!
//! Owns the MySQL connection pool and the product queries.

pub mod product;
pub mod query_builder;

use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::time::Duration;
use thiserror::Error;

use crate::config::{ConfigError, DatabaseConfig};

/// Upper bound on open connections
pub const MAX_CONNECTIONS: u32 = 10;
/// How long a request may wait for a free connection
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Open the pool once at startup
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool, DbError> {
    let options = config.connect_options()?;
    let host = options.get_host().to_string();
    let port = options.get_port();
    let database = options.get_database().unwrap_or_default().to_string();

    let pool = MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    tracing::info!(%host, port, %database, "MySQL pool created");
    Ok(pool)
}
