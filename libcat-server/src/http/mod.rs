//! HTTP server layer
//!
//! Axum server with:
//! - Books, members, transactions, and overdue report under `/api`
//! - Static front-end fallback
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
