//! libcat-server: library catalog HTTP server
//!
//! Tracks books, members, and checkout transactions through a JSON API
//! backed by PostgreSQL, or by an embedded SQLite file when no primary
//! store is configured or reachable.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::CatalogConfig;
pub use db::{Catalog, CatalogStore, DbError, Dialect};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
