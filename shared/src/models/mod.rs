//! Data models
//!
//! Shared between the HTTP service and its clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod number;
pub mod product;

// Re-exports
pub use product::*;
