//! product-server: HTTP CRUD API over the MySQL `products` table
//!
//! - `/api/products`: create, search with pagination, get, update, delete
//! - `/api/health`: liveness
//! - everything else: the bundled front-end, with an SPA fallback

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod state;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;
