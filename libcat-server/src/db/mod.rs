//! Database layer - store selection and per-dialect catalogs
//!
//! # Design Principles
//!
//! - The dialect is resolved once, at startup, into a [`Catalog`]
//! - Handlers see only the [`CatalogStore`] trait
//! - Writes run in a sqlx transaction: commit once, roll back on drop
//! - Rely on DB constraints (UNIQUE, NOT NULL) - no check-then-insert

pub mod pool;
pub mod postgres;
pub mod sqlite;
pub mod store;

pub use pool::{connect, create_pg_pool, create_sqlite_pool, ensure_schema};
pub use postgres::PgStore;
pub use sqlite::SqliteStore;
pub use store::{Catalog, CatalogStore, DbError, Dialect};
