//! Shared types for the product catalog
//!
//! Error types, the product model and pagination, used by the HTTP service
//! and by anything that talks to it.

pub mod error;
pub mod models;
pub mod pagination;

// Re-exports
pub use pagination::{PageRequest, PaginatedResponse};
