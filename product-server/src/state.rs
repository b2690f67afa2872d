//! Application state

use sqlx::MySqlPool;
use std::path::PathBuf;

use crate::config::Config;
use crate::db::{self, DbError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// MySQL connection pool
    pub pool: MySqlPool,
    /// Directory of the bundled front-end
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a new AppState, opening the pool
    pub async fn new(config: &Config) -> Result<Self, DbError> {
        let pool = db::connect(&config.database).await?;
        Ok(Self::from_pool(pool, config.static_dir.clone()))
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: MySqlPool, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            pool,
            static_dir: static_dir.into(),
        }
    }
}
